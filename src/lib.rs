pub mod catalog;
pub mod catalog_store;
pub mod cli_style;
pub mod config;
pub mod navigation;
pub mod query;
pub mod repl;
pub mod stats;

pub use catalog::{CatalogEntry, EntryId, EntryUpdate, NewEntry, SeedSet, UpdateDay};
pub use catalog_store::{CatalogError, CatalogStore, InMemoryCatalogStore};
pub use navigation::{Navigator, Tab, View};
