use crate::domain::constants::CHART_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub out_dir: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub bar_width: Option<usize>,
    #[serde(default)]
    pub log: Option<String>,
}

/// Lowercase word -> occurrence count for one fetched document.
///
/// Keys are never empty and always lowercase; counts are always >= 1.
/// Iteration order is unspecified, consumers sort explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Wraps counts already normalized by the tokenizer.
    pub(crate) fn from_normalized(counts: HashMap<String, u64>) -> Self {
        debug_assert!(counts
            .iter()
            .all(|(w, c)| !w.is_empty() && *c >= 1 && w.to_lowercase() == *w));
        Self { counts }
    }

    /// Builds a table from explicit pairs, rejecting entries that break the
    /// table invariants. Repeated words are summed.
    #[cfg(test)]
    pub fn from_counts<I, S>(pairs: I) -> Result<Self, crate::error::TallyError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (word, count) in pairs {
            let word = word.into();
            if word.is_empty() {
                return Err(crate::error::TallyError::InvalidArgument(
                    "empty word".to_string(),
                ));
            }
            if word.to_lowercase() != word {
                return Err(crate::error::TallyError::InvalidArgument(format!(
                    "word is not lowercase: {word}"
                )));
            }
            if count == 0 {
                return Err(crate::error::TallyError::InvalidArgument(format!(
                    "zero count for word: {word}"
                )));
            }
            *counts.entry(word).or_insert(0) += count;
        }
        Ok(Self { counts })
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Labeled numeric series consumed by a chart renderer.
/// `labels` and `values` are index-aligned.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn from_ranked(entries: &[RankedEntry]) -> Self {
        Self {
            label: CHART_LABEL.to_string(),
            labels: entries.iter().map(|e| e.word.clone()).collect(),
            values: entries.iter().map(|e| e.count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ExportReport {
    pub path: String,
    pub filename: String,
    pub content_type: String,
    pub rows: usize,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct SubmitReport {
    pub source: String,
    pub distinct_words: usize,
    pub total_words: u64,
    pub series: ChartSeries,
    pub export: Option<ExportReport>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct SessionStatus {
    pub phase: Phase,
    pub source: String,
    pub has_table: bool,
    pub distinct_words: usize,
    pub total_words: u64,
    pub last_error: Option<String>,
}
