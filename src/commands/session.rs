use crate::commands::runtime::{export_line, present_submit};
use crate::coordinator::Coordinator;
use crate::domain::models::SessionStatus;
use crate::error::TallyError;
use crate::services::config::Settings;
use crate::services::download::DirDownload;
use crate::services::output::{print_error, print_one};
use crate::services::retrieval::TextSource;
use std::io::BufRead;

const HELP: &[&str] = &[
    "submit   fetch the document and chart the top words (alias: fetch)",
    "export   write the full tally to data.csv (after a successful submit)",
    "status   show the session state",
    "help     show this list",
    "quit     leave the session (alias: exit)",
];

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Submit,
    Export,
    Status,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

pub fn parse_command(line: &str) -> SessionCommand {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "" => SessionCommand::Blank,
        "submit" | "fetch" => SessionCommand::Submit,
        "export" => SessionCommand::Export,
        "status" => SessionCommand::Status,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.trim().to_string()),
    }
}

fn status_line(s: &SessionStatus) -> String {
    let mut line = format!(
        "phase: {}\tsource: {}\tdistinct: {}\ttotal: {}\texport: {}",
        s.phase,
        s.source,
        s.distinct_words,
        s.total_words,
        if s.has_table { "available" } else { "unavailable" }
    );
    if let Some(e) = &s.last_error {
        line.push_str(&format!("\tlast error: {}", e));
    }
    line
}

/// Reads one command per line until `quit` or end of input. Command failures
/// are reported and the session carries on.
pub fn run_session<S: TextSource, R: BufRead>(
    coordinator: &mut Coordinator<S>,
    settings: &Settings,
    json: bool,
    input: R,
) -> anyhow::Result<()> {
    if !json {
        println!("wordfreq session for {}; type help for commands", coordinator.location());
    }
    for line in input.lines() {
        let line = line?;
        let outcome = match parse_command(&line) {
            SessionCommand::Blank => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => print_one(json, HELP, |h| h.join("\n")),
            SessionCommand::Status => print_one(json, coordinator.status(), status_line),
            SessionCommand::Submit => coordinator
                .fetch()
                .map_err(anyhow::Error::from)
                .and_then(|_| present_submit(coordinator, settings, json, false)),
            SessionCommand::Export => coordinator
                .export(&mut DirDownload::new(&settings.out_dir))
                .and_then(|r| print_one(json, r, export_line)),
            SessionCommand::Unknown(cmd) => Err(TallyError::InvalidArgument(format!(
                "unknown command: {cmd} (try help)"
            ))
            .into()),
        };
        if let Err(e) = outcome {
            tracing::debug!(error = %e, "session command failed");
            print_error(json, &e);
        }
    }
    Ok(())
}
