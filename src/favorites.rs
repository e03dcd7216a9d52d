use crate::error::BrowserError;
use crate::storage::KeyValueStore;
use log::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "favorites";

/// Set of favorite recipe ids, written through to a storage slot on every change
#[derive(Debug)]
pub struct FavoritesLedger<S> {
    store: S,
    key: String,
    /// Insertion order is the persisted order
    ids: Vec<u32>,
}

impl<S: KeyValueStore> FavoritesLedger<S> {
    /// Load the ledger from `key`. Absent, unreadable or malformed content
    /// starts an empty ledger instead of failing.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match store.get(&key) {
            Ok(Some(raw)) => parse_ids(&raw).unwrap_or_else(|| {
                warn!("Discarding malformed favorites in slot '{}'", key);
                Vec::new()
            }),
            Ok(None) => {
                debug!("No favorites stored under '{}'", key);
                Vec::new()
            }
            Err(e) => {
                warn!("Could not read favorites slot '{}': {}", key, e);
                Vec::new()
            }
        };

        debug!("Loaded {} favorites", ids.len());
        Self { store, key, ids }
    }

    /// Add or remove `id`, then persist. Returns `true` if `id` is now a favorite.
    /// The ledger is left untouched when the write fails.
    pub fn toggle(&mut self, id: u32) -> Result<bool, BrowserError> {
        let mut ids = self.ids.clone();
        let now_favorite = match ids.iter().position(|&fav| fav == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        self.persist(&ids)?;
        self.ids = ids;
        info!(
            "Recipe {} {} favorites",
            id,
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, ids: &[u32]) -> Result<(), BrowserError> {
        let json = serde_json::to_string(ids)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }
}

/// Accepts a JSON array of ids; duplicates keep their first position
fn parse_ids(raw: &str) -> Option<Vec<u32>> {
    let parsed: Vec<u32> = serde_json::from_str(raw).ok()?;
    let mut ids = Vec::with_capacity(parsed.len());
    for id in parsed {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Some(ids)
}
