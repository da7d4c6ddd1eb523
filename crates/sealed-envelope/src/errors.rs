//! Error types for envelope construction.
//!
//! Verification failures are deliberately NOT errors: a forged or corrupted
//! token must never propagate an exception into the host session layer, so
//! `unseal` reports them through [`crate::UnsealOutcome`] instead. The only
//! fallible operation is building the codec itself.

use crate::config::HashAlgo;
use thiserror::Error;

/// Errors raised when constructing a [`crate::SealedEnvelope`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The configured tag length does not match the digest output length of
    /// the configured algorithm. Both sides of the codec must agree on the
    /// split point, so an inconsistent override is rejected before any
    /// token is ever produced.
    #[error("tag length {configured} does not match {algo} digest length {expected}")]
    TagLengthMismatch {
        algo: HashAlgo,
        configured: usize,
        expected: usize,
    },
}
