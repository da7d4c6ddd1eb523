//! # Inbound Port (Host-Facing Lifecycle)
//!
//! The contract a host session runtime drives. Signatures are dictated by
//! the host's session-handler extension point: operations report success as
//! booleans and read failures as empty payloads, never as errors.

/// Session lifecycle contract consumed by the host runtime.
///
/// Implementations must be thread-safe (`Send + Sync`); the host may drive
/// concurrent requests through a shared handler.
pub trait SessionLifecycle: Send + Sync {
    /// Initialize the session layer. Cookie-backed storage needs no setup,
    /// but the operation exists to satisfy the host contract.
    fn open(&self, save_path: &str, name: &str) -> bool;

    /// Read and verify the session payload for `id`.
    ///
    /// Returns the empty payload when no cookie is present, when the token
    /// is malformed, or when verification fails. Callers cannot and must
    /// not distinguish those cases.
    fn read(&self, id: &str) -> Vec<u8>;

    /// Seal `data` and hand the resulting token to the transport for
    /// delivery under `id`.
    fn write(&self, id: &str, data: &[u8]) -> bool;

    /// Invalidate any token associated with `id`. Idempotent: destroying a
    /// session that does not exist succeeds.
    fn destroy(&self, id: &str) -> bool;

    /// Garbage collection is meaningless for client-held storage; the
    /// client expires cookies itself. Always succeeds.
    fn gc(&self, max_lifetime: u64) -> bool;

    /// Tear down the session layer. No-op for cookie-backed storage.
    fn close(&self) -> bool;
}
