mod file;
mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

use std::io;

/// Flat key-value slot storage, read and written synchronously
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the slot has never been written
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrites the slot in a single write
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}
