//! # Seal / Unseal
//!
//! Pure domain logic for producing and verifying signed cookie tokens.
//!
//! ## Security Notes
//!
//! - **Constant-Time Comparison**: tags are compared with `subtle`, never
//!   with ordinary equality.
//! - **Uniform Rejection**: every failed verification collapses to the same
//!   empty payload via [`UnsealOutcome::into_payload`]. Internal variants
//!   exist for logging only and must not alter what a client observes.
//! - **No Panics on Hostile Input**: `unseal` handles arbitrary attacker-
//!   controlled strings without unwrapping.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use subtle::ConstantTimeEq;

use crate::config::{EnvelopeConfig, HashAlgo};
use crate::errors::EnvelopeError;
use crate::secret::SigningSecret;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

// =============================================================================
// UNSEAL OUTCOME
// =============================================================================

/// Result of verifying a token.
///
/// The three failure variants are distinguishable internally (for logs and
/// metrics) but collapse to the same empty payload at the caller boundary:
/// a forger must not be able to tell "corrupted" from "rejected".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsealOutcome {
    /// Token verified; contains the authenticated payload.
    Verified(Vec<u8>),
    /// No token was supplied. Not an error; there is simply no session.
    Absent,
    /// Token failed base64 decoding, or the decoded blob is too short to
    /// contain a tag.
    Malformed,
    /// Token decoded structurally but the recomputed tag does not match.
    TagMismatch,
}

impl UnsealOutcome {
    /// Returns true if the token verified.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, UnsealOutcome::Verified(_))
    }

    /// The verified payload, or `None` for every failure variant.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            UnsealOutcome::Verified(data) => Some(data),
            _ => None,
        }
    }

    /// Collapse to the externally observable payload: verified data, or
    /// empty for absence, corruption, and forgery alike.
    #[must_use]
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            UnsealOutcome::Verified(data) => data,
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// CODEC
// =============================================================================

/// Signed-envelope codec.
///
/// Stateless per call: `seal` and `unseal` are pure functions of the input
/// and the configured key, safe to share across threads without locking.
pub struct SealedEnvelope {
    algo: HashAlgo,
    tag_len: usize,
    secret: SigningSecret,
}

impl SealedEnvelope {
    /// Build a codec from configuration.
    ///
    /// Resolves the fallback secret when none is configured and rejects
    /// tag-length overrides that disagree with the algorithm's digest size.
    /// This is the only failure point of the codec; `seal` and `unseal`
    /// never fail after construction succeeds.
    pub fn new(config: EnvelopeConfig) -> Result<Self, EnvelopeError> {
        let expected = config.algo.digest_len();
        let tag_len = config.tag_len.unwrap_or(expected);
        if tag_len != expected {
            return Err(EnvelopeError::TagLengthMismatch {
                algo: config.algo,
                configured: tag_len,
                expected,
            });
        }

        let secret = match config.secret {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "no signing secret configured; deriving one from local process \
                     identity. Tokens will not verify across processes or hosts."
                );
                SigningSecret::derived_fallback()
            }
        };

        Ok(Self {
            algo: config.algo,
            tag_len,
            secret,
        })
    }

    /// Build a codec with an explicit secret and default algorithm.
    pub fn with_secret(secret: impl Into<SigningSecret>) -> Self {
        Self::new(EnvelopeConfig::with_secret(secret))
            .expect("default tag length matches default algorithm")
    }

    /// The wire tag length in bytes.
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Encode a payload into a signed token.
    ///
    /// `token = base64(payload || HMAC(algo, payload, secret))`. Always
    /// succeeds, for any payload including the empty one; the caller is
    /// responsible for placing the token into a cookie.
    pub fn seal(&self, payload: &[u8]) -> String {
        let tag = self.compute_tag(payload);

        let mut raw = Vec::with_capacity(payload.len() + tag.len());
        raw.extend_from_slice(payload);
        raw.extend_from_slice(&tag);

        BASE64.encode(raw)
    }

    /// Verify a token back into its payload.
    ///
    /// `None` and the empty string mean "no cookie was presented" and yield
    /// [`UnsealOutcome::Absent`]. Everything else is treated as attacker-
    /// controlled input and rejected without panicking.
    pub fn unseal(&self, token: Option<&str>) -> UnsealOutcome {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return UnsealOutcome::Absent,
        };

        let raw = match BASE64.decode(token) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::debug!("rejected token: not valid base64");
                return UnsealOutcome::Malformed;
            }
        };

        // A valid blob carries at least a full tag.
        if raw.len() < self.tag_len {
            tracing::debug!(len = raw.len(), "rejected token: shorter than tag");
            return UnsealOutcome::Malformed;
        }

        // The tag is the trailing tag_len bytes; the split point needs no
        // delimiter because the tag length is fixed.
        let (data, tag) = raw.split_at(raw.len() - self.tag_len);

        let expected = self.compute_tag(data);
        if !bool::from(expected.as_slice().ct_eq(tag)) {
            tracing::debug!("rejected token: tag mismatch");
            return UnsealOutcome::TagMismatch;
        }

        UnsealOutcome::Verified(data.to_vec())
    }

    /// Compute the MAC tag for a payload under the configured key.
    fn compute_tag(&self, data: &[u8]) -> Vec<u8> {
        match self.algo {
            HashAlgo::Sha256 => {
                let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
                    .expect("HMAC can take key of any size");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            HashAlgo::Sha512 => {
                let mut mac = HmacSha512::new_from_slice(self.secret.as_bytes())
                    .expect("HMAC can take key of any size");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

impl std::fmt::Debug for SealedEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedEnvelope")
            .field("algo", &self.algo)
            .field("tag_len", &self.tag_len)
            .field("secret", &self.secret)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
