//! CatalogStore trait definition.
//!
//! The store is the single owner of the catalog collection. Views and
//! commands receive it by reference; every mutation goes through `add`,
//! `update` or `delete`.

use crate::catalog::{CatalogEntry, EntryId, EntryUpdate, NewEntry, ValidationError};
use thiserror::Error;

/// Errors returned by store mutations.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Entry {0} not found")]
    NotFound(EntryId),

    #[error("Entry with id {0} already exists")]
    DuplicateId(EntryId),

    #[error("No entry id left to assign")]
    IdSpaceExhausted,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Trait for catalog storage backends.
pub trait CatalogStore {
    // =========================================================================
    // Retrieval
    // =========================================================================

    /// All entries, in collection order.
    fn entries(&self) -> &[CatalogEntry];

    /// Get an entry by id.
    fn get_by_id(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries().iter().find(|e| e.id == id)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Counter bumped by every successful mutation.
    fn version(&self) -> u64;

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Validate and insert a new entry, assigning it a fresh id.
    fn add(&mut self, entry: NewEntry) -> Result<&CatalogEntry, CatalogError>;

    /// Merge the given fields into an existing entry. The merged entry is
    /// validated before the change is applied.
    fn update(&mut self, id: EntryId, update: EntryUpdate) -> Result<&CatalogEntry, CatalogError>;

    /// Remove an entry, returning it.
    fn delete(&mut self, id: EntryId) -> Result<CatalogEntry, CatalogError>;
}
