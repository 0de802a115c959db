use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use time::OffsetDateTime;

use crate::fragment::TokenSet;

/// Storage key for the identity token.
pub const ID_TOKEN_KEY: &str = "id_token";
/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the absolute expiry, string-encoded epoch milliseconds.
pub const EXPIRES_AT_KEY: &str = "token_expires_at";

/// Durable string-keyed storage, as the browser exposes it.
///
/// Implementors: the host page's localStorage in production,
/// [`MemoryStorage`] in tests. Reads and writes are synchronous and
/// atomic per key. The backing store is shared across same-origin tabs
/// with no cross-tab coordination: concurrent writers race and the last
/// write wins.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`StorageBackend`] for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Session persistence over an injected [`StorageBackend`].
///
/// Owns the fixed key names and the seconds-to-absolute-expiry
/// conversion; everything else is a raw read or write.
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persist every present field of `tokens` under its fixed key.
    ///
    /// Absent fields leave prior stored values untouched — a merge, not
    /// a replace. `expires_in` is converted to an absolute expiry
    /// (now + seconds × 1000, epoch milliseconds) at write time; a
    /// non-numeric value stores no expiry.
    pub fn save(&self, tokens: &TokenSet) {
        if let Some(id_token) = &tokens.id_token {
            self.backend.set(ID_TOKEN_KEY, id_token);
        }
        if let Some(access_token) = &tokens.access_token {
            self.backend.set(ACCESS_TOKEN_KEY, access_token);
        }
        if let Some(expires_in) = &tokens.expires_in {
            match expires_in.parse::<i64>() {
                Ok(seconds) => {
                    let expires_at = now_millis().saturating_add(seconds.saturating_mul(1000));
                    self.backend.set(EXPIRES_AT_KEY, &expires_at.to_string());
                }
                Err(_) => {
                    tracing::warn!(expires_in = %expires_in, "ignoring non-numeric expires_in");
                }
            }
        }
    }

    /// Remove the whole session record. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(ID_TOKEN_KEY);
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(EXPIRES_AT_KEY);
    }

    /// Raw read of the stored identity token.
    #[must_use]
    pub fn identity_token(&self) -> Option<String> {
        self.backend.get(ID_TOKEN_KEY)
    }

    /// Raw read of the stored access token.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY)
    }

    /// Stored absolute expiry in epoch milliseconds.
    ///
    /// Informational: presence of the identity token, not this
    /// timestamp, decides logged-in state. `None` when unset or not a
    /// valid integer.
    #[must_use]
    pub fn expires_at_millis(&self) -> Option<i64> {
        self.backend.get(EXPIRES_AT_KEY)?.parse().ok()
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
