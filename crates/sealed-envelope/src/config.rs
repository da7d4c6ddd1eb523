//! # Codec Configuration
//!
//! Configuration for the envelope codec: the keyed-hash algorithm, the tag
//! length, and the signing secret.
//!
//! ## Security Requirements
//!
//! - `secret` SHOULD be set explicitly in production; the derived fallback
//!   is predictable and does not survive multiple processes or hosts.
//! - `tag_len` must equal the digest output length of `algo`. Mismatches
//!   are rejected at construction, never at call time.

use crate::secret::SigningSecret;

/// Keyed-hash algorithms supported by the codec.
///
/// A closed enum rather than a free-form identifier: an unsupported
/// algorithm is unrepresentable, so there is no call-time failure path for
/// "unknown algorithm".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgo {
    /// HMAC-SHA-256, 32-byte tag.
    Sha256,
    /// HMAC-SHA-512, 64-byte tag.
    #[default]
    Sha512,
}

impl HashAlgo {
    /// Digest output length in bytes, which is also the wire tag length.
    ///
    /// Tag lengths count raw bytes of the MAC output, not a hex or other
    /// re-encoding of it. Both `seal` and `unseal` share this single value,
    /// so the split point is symmetric by construction.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgo::Sha256 => 32,
            HashAlgo::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgo::Sha256 => f.write_str("sha256"),
            HashAlgo::Sha512 => f.write_str("sha512"),
        }
    }
}

/// Complete codec configuration.
#[derive(Debug, Default)]
pub struct EnvelopeConfig {
    /// Signing secret. `None` (or an empty secret) selects the derived
    /// fallback, which is unsafe outside single-process development.
    pub secret: Option<SigningSecret>,
    /// Keyed-hash algorithm for the tag.
    pub algo: HashAlgo,
    /// Optional tag-length override in bytes. Must equal
    /// `algo.digest_len()`; present so deployments that pin the tag length
    /// in configuration fail loudly when the algorithm changes under them.
    pub tag_len: Option<usize>,
}

impl EnvelopeConfig {
    /// Configuration with an explicit secret and default algorithm.
    pub fn with_secret(secret: impl Into<SigningSecret>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Self::default()
        }
    }

    /// Select the keyed-hash algorithm.
    pub fn algo(mut self, algo: HashAlgo) -> Self {
        self.algo = algo;
        self
    }

    /// Pin the expected tag length in bytes.
    pub fn tag_len(mut self, len: usize) -> Self {
        self.tag_len = Some(len);
        self
    }
}
