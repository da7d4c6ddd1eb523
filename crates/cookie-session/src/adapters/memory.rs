//! # In-Memory Cookie Jar
//!
//! Reference [`CookieTransport`] backed by a `RwLock<HashMap>`. Simulates a
//! single client's cookie jar for tests and demos: it stores whatever
//! expiry the service requested but does not tick wall-clock time. Honoring
//! `Minutes` is the real client's job, while `Expired` drops the entry
//! immediately the way a browser would.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::Expiry;
use crate::ports::outbound::CookieTransport;

/// A cookie as the jar holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    /// The raw token string.
    pub value: String,
    /// The expiry the service requested at delivery time.
    pub expiry: Expiry,
}

/// Thread-safe in-memory cookie jar.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RwLock<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored cookie under `name`, expiry included. Test hook.
    pub fn stored(&self, name: &str) -> Option<StoredCookie> {
        self.read_lock().get(name).cloned()
    }

    /// Number of cookies currently held.
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Returns true if the jar holds no cookies.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, StoredCookie>> {
        // A poisoned jar still holds consistent data; recover the guard.
        match self.cookies.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, StoredCookie>> {
        match self.cookies.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl CookieTransport for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.read_lock().get(name).map(|c| c.value.clone())
    }

    fn set(&self, name: &str, value: &str, expiry: Expiry) -> bool {
        let mut cookies = self.write_lock();
        if expiry == Expiry::Expired {
            // A browser receiving an expired cookie discards it.
            cookies.remove(name);
        } else {
            cookies.insert(
                name.to_string(),
                StoredCookie {
                    value: value.to_string(),
                    expiry,
                },
            );
        }
        true
    }

    fn clear(&self, name: &str) -> bool {
        self.write_lock().remove(name);
        true
    }
}
