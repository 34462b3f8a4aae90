pub mod config;
pub mod session;

mod file_store;
mod memory;
pub use file_store::FileStore;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ConsoleConfig;
pub use session::{AuthSession, AuthStatus, SessionStore, AUTH_FLAG_KEY};
