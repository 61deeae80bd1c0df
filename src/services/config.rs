use crate::domain::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_LIMIT, DEFAULT_LOG_FILTER, DEFAULT_SOURCE, DEFAULT_TIMEOUT_MS,
};
use crate::domain::models::ConfigFile;
use std::path::PathBuf;

/// Effective settings after layering CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub limit: i64,
    pub out_dir: PathBuf,
    pub timeout_ms: u64,
    pub bar_width: usize,
    pub log: String,
}

/// Values given on the command line; `None` falls through to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source: Option<String>,
    pub limit: Option<i64>,
    pub out_dir: Option<PathBuf>,
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/wordfreq/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = match config_path() {
        Ok(p) => p,
        Err(_) => return Ok(ConfigFile::default()),
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

pub fn resolve(file: &ConfigFile, overrides: &Overrides) -> Settings {
    let g = &file.general;
    Settings {
        source: overrides
            .source
            .clone()
            .or_else(|| g.source.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        limit: overrides.limit.or(g.limit).unwrap_or(DEFAULT_LIMIT),
        out_dir: overrides
            .out_dir
            .clone()
            .or_else(|| g.out_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(".")),
        timeout_ms: g.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        bar_width: g.bar_width.unwrap_or(DEFAULT_BAR_WIDTH),
        log: g
            .log
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
    }
}
