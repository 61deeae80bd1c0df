use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordfreq",
    version,
    about = "Chart the most frequent words of a text document and export the tally as CSV"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Document to fetch (http(s) URL or local file path)"
    )]
    pub source: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the document and chart its most frequent words
    Submit {
        #[arg(long, allow_negative_numbers = true, help = "Number of words to chart")]
        limit: Option<i64>,
        #[arg(long, default_value_t = false, help = "Also write the full tally to data.csv")]
        export: bool,
        #[arg(long, help = "Directory receiving data.csv")]
        out_dir: Option<PathBuf>,
    },
    /// Fetch the document and write the full tally to data.csv
    Export {
        #[arg(long, help = "Directory receiving data.csv")]
        out_dir: Option<PathBuf>,
    },
    /// Interactive session reading submit/export/status commands from stdin
    Session {
        #[arg(long, allow_negative_numbers = true, help = "Number of words to chart")]
        limit: Option<i64>,
        #[arg(long, help = "Directory receiving data.csv")]
        out_dir: Option<PathBuf>,
    },
}
