//! Shared constants for integration tests.

// ============================================================================
// Discovery Seed IDs
// ============================================================================

/// "Mystic Chronicles", popularity rank 1
#[allow(dead_code)]
pub const MYSTIC_CHRONICLES_ID: u64 = 1;

/// "Azure Legends", popularity rank 2
#[allow(dead_code)]
pub const AZURE_LEGENDS_ID: u64 = 2;

#[allow(dead_code)]
pub const DISCOVERY_SIZE: usize = 10;

// ============================================================================
// Mixed Catalog
// ============================================================================

/// Offset added to admin seed ids so they don't clash with discovery ids.
#[allow(dead_code)]
pub const ADMIN_ID_OFFSET: u64 = 100;

/// Entry with no rank, no date, no day and no rating.
#[allow(dead_code)]
pub const BARE_ENTRY_ID: u64 = 200;

/// Entry carrying a day but no date.
#[allow(dead_code)]
pub const UNDATED_MONDAY_ID: u64 = 201;

/// Entry with a zero rank and a NaN rating, both unusable as sort keys.
#[allow(dead_code)]
pub const BROKEN_KEYS_ID: u64 = 202;
