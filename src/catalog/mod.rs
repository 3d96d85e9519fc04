mod models;
mod seed;
mod validation;

pub use models::{AiringStatus, CatalogEntry, EntryId, EntryUpdate, NewEntry, UpdateDay};
pub use seed::{admin_seed, discovery_seed, SeedSet};
pub use validation::{validate_entry, validate_new_entry, ValidationError, ValidationResult};
