//! # Outbound Port (Cookie Transport)
//!
//! Explicit interface to wherever cookies actually travel: an HTTP
//! response, a test jar, a browser shim. The service receives a transport
//! at construction; there are no ambient cookie-jar lookups.

use crate::domain::entities::Expiry;

/// Access to the cookie transport for a single client.
///
/// Tokens are opaque to the transport; it moves strings and applies expiry
/// policy, nothing more.
pub trait CookieTransport: Send + Sync {
    /// The raw token presented by the client under `name`, if any.
    fn get(&self, name: &str) -> Option<String>;

    /// Deliver `value` to the client under `name` with the given expiry.
    ///
    /// Returns false when the transport cannot deliver (headers already
    /// sent, jar closed); the service passes that verdict through.
    fn set(&self, name: &str, value: &str, expiry: Expiry) -> bool;

    /// Instruct the client to drop any cookie under `name`, e.g. by
    /// delivering an already-expired marker. Must be idempotent.
    fn clear(&self, name: &str) -> bool;
}
