use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod coordinator;
mod domain;
mod error;
mod services;

use cli::Cli;
use domain::constants::LOG_ENV;
use services::config::{load_config, resolve};
use services::output::print_error;

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let settings = resolve(&config, &commands::overrides(cli));
    init_logging(&settings.log);
    tracing::debug!(?settings, "resolved settings");
    commands::handle_runtime_commands(cli, &settings)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(cli.json, &e);
        std::process::exit(1);
    }
}
