//! # Cookie Session Service
//!
//! Application service that implements the host-facing [`SessionLifecycle`]
//! contract by delegating integrity to the sealed-envelope codec and
//! delivery to the [`CookieTransport`] port.
//!
//! The service never hashes anything itself: the codec owns the envelope
//! format, the transport owns delivery and expiry execution. The service
//! decides which expiry each write gets and collapses every verification
//! failure into the empty payload before the host sees it.

use sealed_envelope::SealedEnvelope;

use crate::domain::entities::{Expiry, SessionId};
use crate::ports::inbound::SessionLifecycle;
use crate::ports::outbound::CookieTransport;

/// Default lifetime for session writes, matching the hour-long cookie the
/// host contract historically handed out.
const DEFAULT_WRITE_EXPIRY: Expiry = Expiry::Minutes(60);

/// Cookie-backed session service.
///
/// Generic over the transport so hosts inject whatever moves their cookies;
/// the codec is fixed at construction and shared read-only across threads.
pub struct CookieSessionService<T: CookieTransport> {
    codec: SealedEnvelope,
    transport: T,
    write_expiry: Expiry,
}

impl<T: CookieTransport> CookieSessionService<T> {
    /// Create a service over a codec and transport.
    pub fn new(codec: SealedEnvelope, transport: T) -> Self {
        Self {
            codec,
            transport,
            write_expiry: DEFAULT_WRITE_EXPIRY,
        }
    }

    /// Override the expiry applied by [`SessionLifecycle::write`].
    pub fn with_write_expiry(mut self, expiry: Expiry) -> Self {
        self.write_expiry = expiry;
        self
    }

    /// The injected transport. Useful for adapters that own their jar.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Storage-object surface
    // =========================================================================

    /// Whether the client presented a cookie under `name`.
    ///
    /// Presence says nothing about validity; a forged cookie still "exists"
    /// until a read rejects it.
    pub fn has(&self, name: &str) -> bool {
        match SessionId::new(name) {
            Ok(id) => self.transport.get(id.as_str()).is_some(),
            Err(_) => false,
        }
    }

    /// Read and verify the cookie under `name`, or return `default`.
    ///
    /// Absence, malformed tokens, and tag mismatches all yield the default:
    /// callers get no signal distinguishing "no cookie" from "forged one".
    pub fn get(&self, name: &str, default: &[u8]) -> Vec<u8> {
        let id = match SessionId::new(name) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "get: rejected cookie name");
                return default.to_vec();
            }
        };

        let token = self.transport.get(id.as_str());
        let outcome = self.codec.unseal(token.as_deref());
        match outcome.payload() {
            Some(data) => data.to_vec(),
            None => default.to_vec(),
        }
    }

    /// Seal `value` and deliver it under `name`.
    ///
    /// `minutes` of `None` makes the cookie session-lived; `Some(m)` bounds
    /// it to `m` minutes. Expiry is policy executed by the transport; the
    /// token itself is identical either way.
    pub fn make(&self, name: &str, value: &[u8], minutes: Option<u32>) -> bool {
        let id = match SessionId::new(name) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "make: rejected cookie name");
                return false;
            }
        };

        let token = self.codec.seal(value);
        let expiry = match minutes {
            Some(m) => Expiry::Minutes(m),
            None => Expiry::SessionLived,
        };
        self.transport.set(id.as_str(), &token, expiry)
    }

    /// Instruct the client to drop the cookie under `name`. Idempotent.
    pub fn forget(&self, name: &str) -> bool {
        match SessionId::new(name) {
            Ok(id) => self.transport.clear(id.as_str()),
            Err(_) => false,
        }
    }
}

impl<T: CookieTransport> SessionLifecycle for CookieSessionService<T> {
    /// Cookie-backed sessions need no storage path; succeeds unconditionally.
    fn open(&self, _save_path: &str, _name: &str) -> bool {
        true
    }

    fn read(&self, id: &str) -> Vec<u8> {
        let id = match SessionId::new(id) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "read: rejected session identifier");
                return Vec::new();
            }
        };

        let token = self.transport.get(id.as_str());
        self.codec.unseal(token.as_deref()).into_payload()
    }

    fn write(&self, id: &str, data: &[u8]) -> bool {
        let id = match SessionId::new(id) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "write: rejected session identifier");
                return false;
            }
        };

        let token = self.codec.seal(data);
        self.transport.set(id.as_str(), &token, self.write_expiry)
    }

    fn destroy(&self, id: &str) -> bool {
        match SessionId::new(id) {
            Ok(id) => self.transport.clear(id.as_str()),
            Err(_) => false,
        }
    }

    /// The client expires its own cookies; nothing to collect server-side.
    fn gc(&self, _max_lifetime: u64) -> bool {
        true
    }

    fn close(&self) -> bool {
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
