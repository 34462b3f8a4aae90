//! Platform session store.
//!
//! Returns the [`store::SessionStore`] that persists the authentication flag:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStorageStore`
//! - **Native**: one file per key under `<data_dir>/geoadmin/` via [`store::FileStore`]

use store::{AuthSession, SessionStore};

pub type ConsoleSession = AuthSession<Box<dyn SessionStore>>;

pub fn make_session_store() -> Box<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Box::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Box::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("geoadmin");
        Box::new(store::FileStore::new(base))
    }
}

/// Load the session flag stored under `storage_key`.
pub fn load_session(storage_key: &str) -> ConsoleSession {
    AuthSession::load_with_key(make_session_store(), storage_key)
}
