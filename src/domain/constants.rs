/// Document fetched when neither `--source` nor the config file names one.
pub const DEFAULT_SOURCE: &str = "https://www.terriblytinytales.com/test.txt";

/// Number of words shown in the chart.
pub const DEFAULT_LIMIT: i64 = 20;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Width in terminal cells of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 50;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "WORDFREQ_LOG";

pub const CHART_LABEL: &str = "Word Frequency";

pub const CSV_FILENAME: &str = "data.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";
