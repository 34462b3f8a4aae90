//! # localStorage session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**. It
//! writes through to `window.localStorage` via [`web_sys::Storage`].
//!
//! ## Key scoping
//!
//! Keys are stored as given, so the authentication flag written by the console
//! lives under the plain `"isAuthenticated"` key unless a prefix is configured
//! with [`LocalStorageStore::with_prefix`].
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, quota, sandboxed iframes). All
//! trait methods log and swallow those errors. Reads return `None` and the
//! other calls do nothing, so the session degrades to "signed out".

use web_sys::Storage;

use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    prefix: String,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store every key as `"<prefix>.<key>"`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: format!("{prefix}."),
        }
    }

    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(_) => {
                tracing::warn!("localStorage is not available");
                None
            }
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl SessionStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(&self.scoped(key)).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(&self.scoped(key), value).is_err() {
            tracing::warn!("Failed to write {key} to localStorage");
        }
    }

    fn clear(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.remove_item(&self.scoped(key)).is_err() {
            tracing::warn!("Failed to clear {key} from localStorage");
        }
    }
}
