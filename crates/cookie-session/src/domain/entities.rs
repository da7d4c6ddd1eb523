//! Domain entities: session identifiers and cookie expiry policy.

use crate::domain::errors::SessionError;

/// Longest identifier the adapter will accept as a cookie name.
const MAX_ID_LEN: usize = 128;

/// A validated session identifier, safe to use as a cookie name.
///
/// The host supplies identifiers as raw strings; this type is the proof
/// that one passed validation. Identifiers are never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Validate a raw identifier.
    ///
    /// Accepts ASCII alphanumerics plus `-`, `_`, and `,` (the character
    /// set common session runtimes draw ids from). Anything else could
    /// smuggle cookie metadata through the transport, so it is rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, SessionError> {
        let id = id.into();

        if id.is_empty() {
            return Err(SessionError::InvalidIdentifier { reason: "empty" });
        }
        if id.len() > MAX_ID_LEN {
            return Err(SessionError::InvalidIdentifier {
                reason: "longer than 128 bytes",
            });
        }
        if !id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b',')
        {
            return Err(SessionError::InvalidIdentifier {
                reason: "contains characters unsafe in a cookie name",
            });
        }

        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cookie expiry policy, decided by the adapter and executed by the
/// transport. The codec knows nothing about expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Cookie lives for the client session only (no explicit expiry).
    SessionLived,
    /// Cookie expires after the given number of minutes.
    Minutes(u32),
    /// Already-expired marker; instructs the client to drop the cookie.
    Expired,
}
