//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while loading search data.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The page descriptor list could not be parsed
    #[error("Invalid search data: {0}")]
    InvalidData(#[from] serde_json::Error),

    /// A record is missing content required for indexing
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position in the input list
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}

impl SearchError {
    /// Returns the shared error code for this error.
    pub fn code(&self) -> srb_core::ErrorCode {
        match self {
            SearchError::InvalidData(_) => srb_core::ErrorCode::InvalidDataset,
            SearchError::InvalidRecord { .. } => srb_core::ErrorCode::InvalidDataset,
        }
    }
}

impl From<SearchError> for srb_core::Error {
    fn from(err: SearchError) -> Self {
        srb_core::Error::new(err.code(), err.to_string()).with_source(err)
    }
}
