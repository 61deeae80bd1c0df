//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` - one-shot `submit` / `export`.
//! - `session.rs` - interactive `session` loop.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate state and business logic to `coordinator` and `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod session;

use crate::cli::{Cli, Commands};
use crate::services::config::Overrides;

pub use runtime::handle_runtime_commands;

/// Flag values that take precedence over the config file.
pub fn overrides(cli: &Cli) -> Overrides {
    let (limit, out_dir) = match &cli.command {
        Commands::Submit { limit, out_dir, .. } | Commands::Session { limit, out_dir } => {
            (*limit, out_dir.clone())
        }
        Commands::Export { out_dir } => (None, out_dir.clone()),
    };
    Overrides {
        source: cli.source.clone(),
        limit,
        out_dir,
    }
}
