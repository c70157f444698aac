//! Error conditions the engine reports to its caller.
//!
//! An empty selection is not an error: it is `Ok(vec![])`. The boundary
//! decides how each condition maps onto a transport status.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or missing filter fields. Nothing was evaluated.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected failure during selection. The detail is for logs only.
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl EngineError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidRequest(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        EngineError::InternalFailure(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
