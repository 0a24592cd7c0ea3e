//! Error types for the order crate.

use crate::validation::FormError;
use thiserror::Error;

/// Result type alias for order operations.
pub type Result<T> = std::result::Result<T, OrderError>;

/// Errors raised by the order form and its session store.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The form data did not pass validation
    #[error(transparent)]
    Form(#[from] FormError),

    /// The order has not been assigned a number yet
    #[error("Order has no order number")]
    MissingOrderNumber,

    /// A checkout step outside the form's range
    #[error("Step {step} is outside 1..={max}")]
    InvalidStep { step: u8, max: u8 },

    /// Nothing is stored under the order number
    #[error("No saved session for order {0}")]
    SessionNotFound(String),

    /// The stored session could not be parsed
    #[error("Saved session for order {order_number} is corrupt: {source}")]
    CorruptSession {
        order_number: String,
        #[source]
        source: serde_json::Error,
    },

    /// An order could not be serialized
    #[error("Failed to serialize order: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrderError {
    /// Returns the shared error code for this error.
    pub fn code(&self) -> srb_core::ErrorCode {
        use srb_core::ErrorCode;

        match self {
            OrderError::Form(e) => e.code(),
            OrderError::MissingOrderNumber => ErrorCode::MissingField,
            OrderError::InvalidStep { .. } => ErrorCode::OutOfRange,
            OrderError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            OrderError::CorruptSession { .. } => ErrorCode::CorruptSession,
            OrderError::Json(_) => ErrorCode::StorageError,
        }
    }
}

impl From<OrderError> for srb_core::Error {
    fn from(err: OrderError) -> Self {
        let suggestion = match &err {
            OrderError::SessionNotFound(_) => Some("Start a new order"),
            OrderError::CorruptSession { .. } => Some("Remove the stored session and start over"),
            _ => None,
        };

        let mut core = srb_core::Error::new(err.code(), err.to_string());
        if let Some(suggestion) = suggestion {
            core = core.with_suggestion(suggestion);
        }
        core.with_source(err)
    }
}
