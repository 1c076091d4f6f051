/// Core error types for Bookclub admin tooling
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An age-band label outside the fixed vocabulary
    #[error("Unknown age band: {0}")]
    UnknownAgeBand(String),

    /// A search-field selector outside the fixed vocabulary
    #[error("Unknown search field: {0}")]
    UnknownSearchField(String),

    /// A status-filter value outside the fixed vocabulary
    #[error("Unknown status filter: {0}")]
    UnknownStatusFilter(String),
}
