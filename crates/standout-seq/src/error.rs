//! Error types for the seq crate.

use thiserror::Error;

/// Errors that can occur when building or traversing sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The sequence has no more elements.
    ///
    /// Expected and recoverable: consumers that check
    /// [`has_next`](crate::Sequence::has_next) first never see it.
    #[error("sequence has no more elements")]
    Exhausted,

    /// A stage was advanced without a preceding positive `has_next` check.
    #[error("{stage} advanced without a positive has_next check")]
    Protocol { stage: &'static str },

    /// The operation is never supported by sequences.
    #[error("operation '{operation}' is not supported on sequences")]
    Unsupported { operation: &'static str },

    /// A required construction argument was absent.
    #[error("argument \"{name}\" cannot be absent")]
    MissingArgument { name: &'static str },

    /// A construction argument was present but not usable.
    #[error("invalid argument \"{name}\": {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// An element could not be converted to the target type.
    #[error("cannot convert element of type {from} to {to}")]
    Cast {
        from: &'static str,
        to: &'static str,
    },
}

impl SeqError {
    /// Create a missing-argument error.
    pub fn missing(name: &'static str) -> Self {
        tracing::debug!(argument = name, "rejected absent stage argument");
        Self::MissingArgument { name }
    }

    /// Create an invalid-argument error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(argument = name, %reason, "rejected stage argument");
        Self::InvalidArgument { name, reason }
    }

    /// Returns `true` for the recoverable out-of-elements error.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SeqError::Exhausted)
    }
}

/// Result type for seq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
