use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_values<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut guard = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.with_values(|values| values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) {
        self.with_values(|values| values.insert(key.to_string(), value.to_string()));
    }

    fn clear(&self, key: &str) {
        self.with_values(|values| values.remove(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_clear() {
        let store = MemoryStore::new();
        assert!(store.read("k").is_none());

        store.write("k", "v");
        assert_eq!(store.read("k").as_deref(), Some("v"));

        store.write("k", "w");
        assert_eq!(store.read("k").as_deref(), Some("w"));

        store.clear("k");
        assert!(store.read("k").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.write("k", "v");
        assert_eq!(other.read("k").as_deref(), Some("v"));
    }
}
