//! # Sealed Envelope Codec
//!
//! Encodes an arbitrary byte payload into a signed, transport-safe token and
//! verifies that token back into the payload, rejecting anything a client
//! tampered with in between.
//!
//! ## Wire Format
//!
//! ```text
//! token = base64( payload || HMAC(algo, payload, secret) )
//! ```
//!
//! The tag is fixed-length and appended, so parsing needs no delimiter or
//! escaping scheme: any byte sequence is legal payload content and the split
//! point is computed purely from the known tag length.
//!
//! ## Security Properties
//!
//! - **Integrity only**: payloads are authenticated, NOT encrypted. Clients
//!   can read their own session data; they cannot alter it undetected.
//! - **Constant-Time Verification**: tag comparison uses the `subtle` crate
//!   to avoid timing side-channels.
//! - **Uniform Rejection**: absence, malformed tokens, and forged tags all
//!   collapse to the same empty payload at the caller boundary, denying an
//!   attacker any distinguishing signal.

pub mod codec;
pub mod config;
pub mod errors;
pub mod secret;

// Re-export public API
pub use codec::{SealedEnvelope, UnsealOutcome};
pub use config::{EnvelopeConfig, HashAlgo};
pub use errors::EnvelopeError;
pub use secret::SigningSecret;
