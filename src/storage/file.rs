use super::KeyValueStore;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Slots kept in a single JSON object file: `{ "slot": "value", ... }`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> io::Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Storage file {} does not exist yet", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&content) {
            Ok(slots) => Ok(slots),
            Err(e) => {
                // A corrupt file is treated like an empty one and replaced on next write
                warn!(
                    "Ignoring unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&slots)?;

        // Write-then-rename keeps the slot file whole
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote slot '{}' to {}", key, self.path.display());
        Ok(())
    }
}
