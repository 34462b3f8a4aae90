//! # Session persistence boundary and the authentication state machine
//!
//! The console keeps exactly one piece of persisted client state: whether the
//! operator is signed in. This module separates *where* that flag lives from
//! *how* it behaves.
//!
//! ## [`SessionStore`] trait
//!
//! A synchronous key/value interface with three methods (`read`, `write`,
//! `clear`). Implementations live in sibling modules:
//!
//! | Store | Platform |
//! |-------|----------|
//! | [`crate::MemoryStore`] | tests, fallback |
//! | [`crate::FileStore`] | desktop builds (one file per key) |
//! | `LocalStorageStore` | browser, behind the `web` feature |
//!
//! ## [`AuthSession`]
//!
//! Two states, [`AuthStatus::Authenticated`] and [`AuthStatus::Unauthenticated`].
//! The initial state is read once from the store and is **fail-closed**: only the
//! literal string `"true"` under the configured key counts as signed in. There is
//! no expiry transition.

/// Default storage key for the authentication flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

const AUTH_FLAG_VALUE: &str = "true";

/// Key/value persistence used for client session state.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }

    fn clear(&self, key: &str) {
        (**self).clear(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        self == AuthStatus::Authenticated
    }
}

/// The authentication flag, mirrored into a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct AuthSession<S: SessionStore> {
    store: S,
    key: String,
    status: AuthStatus,
}

impl<S: SessionStore> AuthSession<S> {
    /// Load the session using the default [`AUTH_FLAG_KEY`].
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, AUTH_FLAG_KEY)
    }

    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let status = match store.read(&key).as_deref() {
            Some(AUTH_FLAG_VALUE) => AuthStatus::Authenticated,
            _ => AuthStatus::Unauthenticated,
        };
        tracing::debug!(?status, "session loaded");
        Self { store, key, status }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    pub fn login(&mut self) {
        self.status = AuthStatus::Authenticated;
        self.store.write(&self.key, AUTH_FLAG_VALUE);
    }

    pub fn logout(&mut self) {
        self.status = AuthStatus::Unauthenticated;
        self.store.clear(&self.key);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_unset_flag_is_unauthenticated() {
        let session = AuthSession::load(MemoryStore::new());
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_only_literal_true_authenticates() {
        for value in ["false", "TRUE", "1", ""] {
            let store = MemoryStore::new();
            store.write(AUTH_FLAG_KEY, value);
            assert!(!AuthSession::load(store).is_authenticated(), "{value:?}");
        }

        let store = MemoryStore::new();
        store.write(AUTH_FLAG_KEY, "true");
        assert!(AuthSession::load(store).is_authenticated());
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = MemoryStore::new();
        let mut session = AuthSession::load(store.clone());

        session.login();
        assert!(session.is_authenticated());
        assert_eq!(store.read(AUTH_FLAG_KEY).as_deref(), Some("true"));

        // A fresh load sees the persisted flag
        assert!(AuthSession::load(store.clone()).is_authenticated());

        session.logout();
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
        assert!(store.read(AUTH_FLAG_KEY).is_none());
        assert!(!AuthSession::load(store).is_authenticated());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut session = AuthSession::load_with_key(store.clone(), "console.auth");
        session.login();
        assert_eq!(store.read("console.auth").as_deref(), Some("true"));
        assert!(store.read(AUTH_FLAG_KEY).is_none());
    }

    #[test]
    fn test_boxed_store() {
        let memory = MemoryStore::new();
        let boxed: Box<dyn SessionStore> = Box::new(memory.clone());
        let mut session = AuthSession::load(boxed);
        session.login();
        assert_eq!(memory.read(AUTH_FLAG_KEY).as_deref(), Some("true"));
    }
}
