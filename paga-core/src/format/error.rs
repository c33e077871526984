use crate::business::{ServiceMethod, ValidationError};

/// Failures below the business layer, reported by whatever carries the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GenericError {
    #[error("call timed out")]
    TimeOut,
    #[error("service unreachable")]
    Offline,
    #[error("transport error")]
    General,
    #[error("unparseable payload")]
    ParsingError,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PagaError {
    #[error("request rejected: {0}")]
    Validation(#[from] ValidationError),
    #[error("malformed {method} response: {reason}")]
    Malformed {
        method: ServiceMethod,
        reason: String,
    },
    #[error("{method} response echoed reference {received:?}, expected {sent:?}")]
    ReferenceMismatch {
        method: ServiceMethod,
        sent: String,
        received: String,
    },
    #[error(transparent)]
    Other(#[from] GenericError),
}
