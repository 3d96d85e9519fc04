mod store;
mod trait_def;

pub use store::InMemoryCatalogStore;
pub use trait_def::{CatalogError, CatalogStore};
