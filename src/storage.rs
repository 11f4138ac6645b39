#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use anyhow::{anyhow, Result};

/// String key-value backing store. Reads treat an unavailable store as empty.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}

fn read(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
    storage.and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write(storage: Option<web_sys::Storage>, key: &str, value: &str) -> Result<()> {
    let storage = storage.ok_or_else(|| anyhow!("storage unavailable"))?;
    storage
        .set_item(key, value)
        .map_err(|e| anyhow!("failed to write {}: {:?}", key, e))
}

fn delete(storage: Option<web_sys::Storage>, key: &str) -> Result<()> {
    let storage = storage.ok_or_else(|| anyhow!("storage unavailable"))?;
    storage
        .remove_item(key)
        .map_err(|e| anyhow!("failed to remove {}: {:?}", key, e))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        read(local_storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write(local_storage(), key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        delete(local_storage(), key)
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        read(session_storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write(session_storage(), key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        delete(session_storage(), key)
    }
}

/// In-memory store; `unavailable()` behaves like a disabled or full browser store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            unavailable: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("storage unavailable"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("storage unavailable"));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_and_removes() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "0").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("0"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn unavailable_store_rejects_writes_and_reads_empty() {
        let store = MemoryStore::unavailable();
        assert!(store.set("k", "1").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k"), None);
    }
}
