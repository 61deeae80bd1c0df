use crate::cli::{Cli, Commands};
use crate::commands::session::run_session;
use crate::coordinator::Coordinator;
use crate::domain::models::{ExportReport, SubmitReport};
use crate::error::TallyError;
use crate::services::chart::{ChartRenderer, TerminalBarChart};
use crate::services::config::Settings;
use crate::services::download::DirDownload;
use crate::services::output::print_one;
use crate::services::retrieval::{SourceFetcher, TextSource};

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new(
        SourceFetcher::new(settings.timeout_ms),
        settings.source.clone(),
    );
    match &cli.command {
        Commands::Submit { export, .. } => {
            coordinator.fetch()?;
            present_submit(&coordinator, settings, cli.json, *export)?;
        }
        Commands::Export { .. } => {
            coordinator.fetch()?;
            let report = coordinator.export(&mut DirDownload::new(&settings.out_dir))?;
            print_one(cli.json, report, export_line)?;
        }
        Commands::Session { .. } => {
            let stdin = std::io::stdin();
            run_session(&mut coordinator, settings, cli.json, stdin.lock())?;
        }
    }
    Ok(())
}

pub fn export_line(r: &ExportReport) -> String {
    format!("exported {} rows to {} ({})", r.rows, r.path, r.content_type)
}

/// Prints the chart for the current table, exporting first when asked.
pub fn present_submit<S: TextSource>(
    coordinator: &Coordinator<S>,
    settings: &Settings,
    json: bool,
    export: bool,
) -> anyhow::Result<()> {
    let series = coordinator
        .chart(settings.limit)?
        .ok_or(TallyError::NotReady)?;
    let exported = if export {
        Some(coordinator.export(&mut DirDownload::new(&settings.out_dir))?)
    } else {
        None
    };
    let status = coordinator.status();

    if json {
        let report = SubmitReport {
            source: status.source,
            distinct_words: status.distinct_words,
            total_words: status.total_words,
            series,
            export: exported,
        };
        return print_one(true, report, |_| String::new());
    }

    let mut chart = TerminalBarChart::new(std::io::stdout(), settings.bar_width);
    chart.render(&series)?;
    println!(
        "{} distinct words, {} total ({})",
        status.distinct_words, status.total_words, status.source
    );
    if let Some(r) = &exported {
        println!("{}", export_line(r));
    }
    Ok(())
}
