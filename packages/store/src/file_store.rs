//! # Filesystem-backed session store
//!
//! [`FileStore`] persists each key as a small file under a base directory. It is
//! used by native builds so the sign-in flag survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session/
//!     └── <key>          # file containing the raw value
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/geoadmin/` on Linux.

use std::io;
use std::path::{Path, PathBuf};

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_dir(&self) -> PathBuf {
        self.base.join("session")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; keep separators out of the path.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.session_dir().join(name)
    }

    /// Remove every persisted session value under `base`.
    pub fn delete_all(base: &Path) {
        let dir = base.join("session");
        if let Err(e) = ignore_missing(std::fs::remove_dir_all(&dir)) {
            tracing::warn!("Failed to remove session dir {}: {}", dir.display(), e);
        }
    }

    /// Remove the file behind `key`; a key that was never written is fine.
    fn remove_key(&self, key: &str) -> io::Result<()> {
        ignore_missing(std::fs::remove_file(self.key_path(key)))
    }
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

impl SessionStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create session dir {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to persist session key {key}: {e}");
        }
    }

    fn clear(&self, key: &str) {
        if let Err(e) = self.remove_key(key) {
            tracing::warn!("Failed to clear session key {key}: {e}");
        }
    }
}
