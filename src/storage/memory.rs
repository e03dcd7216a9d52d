use super::KeyValueStore;
use std::collections::HashMap;
use std::io;

/// In-process store, mostly for tests and one-shot rendering
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.into(), value.into());
        store
    }

    /// Number of `set` calls since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
