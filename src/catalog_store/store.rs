//! In-memory catalog store.

use super::trait_def::{CatalogError, CatalogStore};
use crate::catalog::{
    validate_entry, validate_new_entry, CatalogEntry, EntryId, EntryUpdate, NewEntry, SeedSet,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Catalog kept in a `Vec`, newest additions first.
///
/// Ids come from a counter that starts above the highest seeded id and only
/// moves forward, so an id is never handed out twice in a session even if
/// the entry holding the highest id is deleted. Once `u64::MAX` has been
/// used the counter is exhausted and `add` fails.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogStore {
    entries: Vec<CatalogEntry>,
    next_id: Option<u64>,
    version: u64,
}

impl InMemoryCatalogStore {
    /// Build a store from an explicit list of entries. Fails on duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in entries.iter() {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }
        let next_id = match entries.iter().map(|e| e.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Ok(InMemoryCatalogStore {
            entries,
            next_id,
            version: 0,
        })
    }

    pub fn from_seed(seed: SeedSet) -> Result<Self, CatalogError> {
        let store = Self::new(seed.entries())?;
        info!("Catalog seeded with {} entries ({:?})", store.len(), seed);
        Ok(store)
    }

    /// The id the next `add` will assign, `None` when ids are exhausted.
    pub fn next_id(&self) -> Option<EntryId> {
        self.next_id.map(EntryId)
    }

    fn position_of(&self, id: EntryId) -> Result<usize, CatalogError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        InMemoryCatalogStore {
            entries: vec![],
            next_id: Some(1),
            version: 0,
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn add(&mut self, entry: NewEntry) -> Result<&CatalogEntry, CatalogError> {
        validate_new_entry(&entry)?;

        let id = EntryId(self.next_id.ok_or(CatalogError::IdSpaceExhausted)?);
        self.next_id = id.0.checked_add(1);
        self.entries.insert(0, CatalogEntry::from_new(id, entry));
        self.version += 1;

        debug!("Added entry {} ({} entries)", id, self.entries.len());
        Ok(&self.entries[0])
    }

    fn update(&mut self, id: EntryId, update: EntryUpdate) -> Result<&CatalogEntry, CatalogError> {
        let index = self.position_of(id)?;

        let mut candidate = self.entries[index].clone();
        update.apply(&mut candidate);
        validate_entry(&candidate)?;

        self.entries[index] = candidate;
        self.version += 1;

        debug!("Updated entry {}", id);
        Ok(&self.entries[index])
    }

    fn delete(&mut self, id: EntryId) -> Result<CatalogEntry, CatalogError> {
        let index = self.position_of(id)?;
        let removed = self.entries.remove(index);
        self.version += 1;

        debug!("Deleted entry {} ({} entries left)", id, self.entries.len());
        Ok(removed)
    }
}
