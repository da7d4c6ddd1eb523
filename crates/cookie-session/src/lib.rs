//! # Cookie Session Handler
//!
//! Maps a host session lifecycle onto the sealed-envelope codec, storing
//! session state entirely in a client-held cookie instead of server-side
//! storage.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): identifiers, expiry policy, errors
//! - **Ports Layer** (`ports/`): the host-facing lifecycle contract and the
//!   cookie-transport interface
//! - **Service Layer** (`service.rs`): wires the codec to the transport
//! - **Adapters** (`adapters/`): reference transport implementations
//!
//! ## Security Notes
//!
//! - The service never inspects payload bytes; integrity is the codec's job.
//! - Absent, malformed, and forged cookies are indistinguishable to callers:
//!   all read paths return the empty payload (or the supplied default).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::MemoryCookieJar;
pub use domain::entities::{Expiry, SessionId};
pub use domain::errors::SessionError;
pub use ports::inbound::SessionLifecycle;
pub use ports::outbound::CookieTransport;
pub use service::CookieSessionService;
