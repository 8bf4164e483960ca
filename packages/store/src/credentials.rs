//! # Credential persistence
//!
//! The admin console keeps exactly two durable entries between reloads: the
//! bearer `token` returned by the login endpoint and the `role` string that
//! came with it. Both live in a [`KeyValueStore`], an interface shaped after
//! browser storage (`getItem` / `setItem` / `removeItem` / `clear`), so the same
//! credential logic runs against `localStorage` in the browser, a directory of
//! small files on native targets, or a `HashMap` in tests.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`KeyValueStore`] | Low-level string storage. Infallible: backends log and swallow I/O errors, an unreadable store behaves like an empty one. |
//! | [`CredentialStore`] | `save` / `load` / `clear` for the auth pair, plus `clear_all` which wipes every key in the backing store. |
//! | [`StoredCredentials`] | The pair as read back. A token is required; the role may be missing if storage was edited by hand. |
//!
//! There is no expiry or refresh. A stale token is only discovered when the
//! backend rejects a later request.

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// String key-value storage with browser `Storage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Remove every entry, not only the ones this crate wrote.
    fn clear(&self);
}

/// Credentials as persisted between application starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub role: Option<String>,
}

/// Auth-specific view over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct CredentialStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist both fields durably.
    pub fn save(&self, token: &str, role: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(ROLE_KEY, role);
    }

    /// The last saved pair, or `None` when no token is stored.
    pub fn load(&self) -> Option<StoredCredentials> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(StoredCredentials {
            token,
            role: self.store.get(ROLE_KEY),
        })
    }

    /// Remove the auth fields only.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(ROLE_KEY);
    }

    /// Wipe the whole backing store.
    pub fn clear_all(&self) {
        self.store.clear();
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
