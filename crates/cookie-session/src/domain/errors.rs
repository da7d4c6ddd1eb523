//! Error types for the session adapter.
//!
//! Verification failures never surface here; the codec collapses them to an
//! empty payload before the adapter sees them. These errors cover only the
//! adapter's own input validation.

use thiserror::Error;

/// Errors raised by session-adapter operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session identifier is empty, too long, or contains characters
    /// that are not safe in a cookie name.
    #[error("invalid session identifier: {reason}")]
    InvalidIdentifier { reason: &'static str },
}
