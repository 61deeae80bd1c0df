#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no word counts yet; run submit first")]
    NotReady,
}

impl TallyError {
    /// Stable code used in `--json` error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            TallyError::Retrieval(_) => "RETRIEVAL_ERROR",
            TallyError::InvalidArgument(_) => "INVALID_ARGUMENT",
            TallyError::NotReady => "NOT_READY",
        }
    }
}

/// Picks the JSON error code for any error surfaced by a command.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<TallyError>()
        .map(TallyError::code)
        .unwrap_or("INTERNAL")
}
