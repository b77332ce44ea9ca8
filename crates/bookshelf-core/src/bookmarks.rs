//! Persisted bookmark set.
//!
//! Bookmarks are stored under [`BOOKMARKS_KEY`] as a JSON list of record
//! ids, in the order they were added. Every toggle writes the whole list
//! back before returning.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::StorageError;
use crate::storage::{KeyValueStore, BOOKMARKS_KEY};

/// Bookmarked record ids, backed by a key-value store.
pub struct BookmarkStore {
    ids: Vec<String>,
    store: Arc<dyn KeyValueStore>,
}

impl BookmarkStore {
    /// Load bookmarks from `store`.
    ///
    /// A missing, unreadable or corrupt value yields an empty set.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let ids = match store.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => decode_bookmarks(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding persisted bookmarks: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read bookmarks, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { ids, store }
    }

    /// Whether `id` is bookmarked.
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.ids.iter().any(|b| b == id)
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    ///
    /// If the write fails the in-memory set is restored and the error returned.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StorageError> {
        let previous = self.ids.clone();
        let now_bookmarked = if let Some(pos) = self.ids.iter().position(|b| b == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        };

        if let Err(e) = self.persist() {
            self.ids = previous;
            return Err(e);
        }

        tracing::debug!("Bookmark {} -> {}", id, now_bookmarked);
        Ok(now_bookmarked)
    }

    /// Snapshot of all bookmarked ids.
    pub fn all(&self) -> BTreeSet<String> {
        self.ids.iter().cloned().collect()
    }

    /// Bookmarked ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = encode_bookmarks(&self.ids)?;
        self.store.set(BOOKMARKS_KEY, &encoded)
    }
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore").field("ids", &self.ids).finish()
    }
}

/// Serialize ids as a JSON list.
pub fn encode_bookmarks(ids: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(ids)?)
}

/// Parse a persisted id list, dropping repeated ids.
pub fn decode_bookmarks(raw: &str) -> Result<Vec<String>, StorageError> {
    let parsed: Vec<String> = serde_json::from_str(raw).map_err(|e| StorageError::Corrupt {
        key: BOOKMARKS_KEY.to_string(),
        reason: e.to_string(),
    })?;

    let mut ids: Vec<String> = Vec::with_capacity(parsed.len());
    for id in parsed {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
