//! Error types for the variants crate.

use thiserror::Error;

/// Result type alias for variant operations.
pub type Result<T> = std::result::Result<T, VariantError>;

/// Errors raised while loading the variant dataset.
#[derive(Debug, Error)]
pub enum VariantError {
    /// The dataset could not be parsed
    #[error("Invalid variant data: {0}")]
    InvalidData(#[from] serde_json::Error),

    /// A category key outside the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl VariantError {
    /// Returns the shared error code for this error.
    pub fn code(&self) -> srb_core::ErrorCode {
        match self {
            VariantError::InvalidData(_) => srb_core::ErrorCode::InvalidDataset,
            VariantError::UnknownCategory(_) => srb_core::ErrorCode::InvalidFormat,
        }
    }
}

impl From<VariantError> for srb_core::Error {
    fn from(err: VariantError) -> Self {
        srb_core::Error::new(err.code(), err.to_string()).with_source(err)
    }
}
