//! Session state machine: retrieval -> count -> rank/export.
//!
//! The coordinator owns the only mutable state of a session, the current
//! [`FrequencyTable`]. A table is replaced wholesale by a completed fetch and
//! is never edited in place. A failed fetch leaves the previous table (if
//! any) untouched.
//!
//! Fetches are split into [`Coordinator::begin_fetch`] and
//! [`Coordinator::complete_fetch`] so that a response arriving for a
//! superseded request can be recognised and dropped. Only the most recently
//! issued ticket may change state.

use crate::domain::constants::{CSV_CONTENT_TYPE, CSV_FILENAME};
use crate::domain::models::{ChartSeries, ExportReport, FrequencyTable, Phase, SessionStatus};
use crate::error::TallyError;
use crate::services::counter::count_words;
use crate::services::csv::to_csv;
use crate::services::download::Download;
use crate::services::ranking::rank_top;
use crate::services::retrieval::TextSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied {
        distinct_words: usize,
        total_words: u64,
    },
    /// A newer fetch was started before this one completed.
    Superseded,
}

pub struct Coordinator<S: TextSource> {
    source: S,
    location: String,
    phase: Phase,
    table: Option<FrequencyTable>,
    issued: u64,
    last_error: Option<String>,
}

impl<S: TextSource> Coordinator<S> {
    pub fn new(source: S, location: impl Into<String>) -> Self {
        Self {
            source,
            location: location.into(),
            phase: Phase::Idle,
            table: None,
            issued: 0,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn table(&self) -> Option<&FrequencyTable> {
        self.table.as_ref()
    }

    pub fn can_export(&self) -> bool {
        self.table.is_some()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.phase = Phase::Loading;
        tracing::debug!(ticket = self.issued, location = %self.location, "fetch started");
        FetchTicket(self.issued)
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: anyhow::Result<String>,
    ) -> Result<FetchOutcome, TallyError> {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding superseded fetch result"
            );
            return Ok(FetchOutcome::Superseded);
        }
        match result {
            Ok(text) => {
                let table = count_words(&text);
                if table.is_empty() {
                    tracing::info!(location = %self.location, "document contains no words");
                }
                let outcome = FetchOutcome::Applied {
                    distinct_words: table.len(),
                    total_words: table.total(),
                };
                tracing::info!(
                    location = %self.location,
                    distinct_words = table.len(),
                    total_words = table.total(),
                    "word counts updated"
                );
                self.table = Some(table);
                self.phase = Phase::Ready;
                self.last_error = None;
                Ok(outcome)
            }
            Err(e) => {
                let err = TallyError::Retrieval(format!("{}: {:#}", self.location, e));
                tracing::warn!(error = %err, "fetch failed");
                self.phase = Phase::Failed;
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Retrieves the configured location and applies the result.
    pub fn fetch(&mut self) -> Result<FetchOutcome, TallyError> {
        let ticket = self.begin_fetch();
        let result = self.source.fetch_text(&self.location);
        self.complete_fetch(ticket, result)
    }

    /// Top `limit` words as a chart series, `None` before the first table.
    pub fn chart(&self, limit: i64) -> Result<Option<ChartSeries>, TallyError> {
        match &self.table {
            None => Ok(None),
            Some(table) => Ok(Some(ChartSeries::from_ranked(&rank_top(table, limit)?))),
        }
    }

    /// Writes the full table as CSV through `sink`. State is unchanged.
    pub fn export(&self, sink: &mut dyn Download) -> anyhow::Result<ExportReport> {
        let table = self.table.as_ref().ok_or(TallyError::NotReady)?;
        let doc = to_csv(table);
        sink.save(doc.as_bytes(), CSV_FILENAME, CSV_CONTENT_TYPE)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase(),
            source: self.location.clone(),
            has_table: self.can_export(),
            distinct_words: self.table().map(|t| t.len()).unwrap_or(0),
            total_words: self.table().map(|t| t.total()).unwrap_or(0),
            last_error: self.last_error.clone(),
        }
    }
}
