//! # Signing Secret
//!
//! Wrapper for the HMAC key that zeroizes memory on drop.
//!
//! ## Security
//!
//! Key material should not linger in memory after use. This wrapper ensures
//! the bytes are zeroed when the value is dropped, and its `Debug` output
//! never prints them.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret key for the envelope MAC that zeroizes on drop.
///
/// HMAC accepts keys of any length, so no length is enforced here; an empty
/// secret is treated as "not configured" by [`crate::SealedEnvelope`] and
/// replaced with the derived fallback.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret {
    inner: Vec<u8>,
}

impl SigningSecret {
    /// Create a signing secret from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Derive a fallback secret from local host and process identity.
    ///
    /// # Security
    ///
    /// This is NOT a real secret. It is predictable to anyone who can learn
    /// the host name and process id, and it differs between processes, so
    /// tokens issued by one worker will not verify in another. It exists so
    /// that single-process development setups work without configuration;
    /// production deployments must supply their own key.
    pub fn derived_fallback() -> Self {
        let hostname = std::env::var("HOSTNAME")
            .or_else(|_| std::env::var("COMPUTERNAME"))
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(hostname.as_bytes());
        hasher.update(std::env::consts::OS.as_bytes());
        hasher.update(std::env::consts::ARCH.as_bytes());
        hasher.update(std::process::id().to_le_bytes());

        Self {
            inner: hasher.finalize().to_vec(),
        }
    }

    /// Get the key bytes (use immediately, avoid holding the reference).
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Returns true if the secret holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SigningSecret(***)")
    }
}

impl From<&[u8]> for SigningSecret {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<&str> for SigningSecret {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}
