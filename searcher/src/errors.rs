use std::time;
use thiserror::Error;

/// Error produced when a search is cut short by one of its limits.
///
/// Exhausting the frontier without reaching a goal is not an error,
/// see [crate::Outcome].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
