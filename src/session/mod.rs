//! @acp:module "Session Storage"
//! @acp:summary "Session-scoped key/value storage used to remember the chosen variant"
//! @acp:domain cli
//! @acp:layer service
//!
//! A session store plays the part of the browser's session storage: it lives
//! for one visit and is discarded afterwards. The resolver only ever touches a
//! single key, but stores are general key/value maps so a backend can be shared.

pub mod file;

pub use file::{FileSessionStore, SessionFile};

use std::collections::HashMap;

/// Session storage capability injected into the resolver
pub trait SessionStore {
    /// Read a value; unreadable or missing entries are `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> crate::Result<()>;

    /// Remove a value if present
    fn remove(&mut self, key: &str) -> crate::Result<()>;
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    /// Number of `set` calls since construction
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> crate::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> crate::Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySessionStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "B").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("B"));
        assert_eq!(store.writes(), 1);

        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_entry_does_not_count_as_write() {
        let store = MemorySessionStore::with_entry("k", "D");
        assert_eq!(store.get("k").as_deref(), Some("D"));
        assert_eq!(store.writes(), 0);
    }
}
