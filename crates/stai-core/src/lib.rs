//! stai-core
//!
//! Pure domain types for the State-Trait Anxiety Inventory: subject
//! profile, item responses, the answer sheet, and result records.
//! No scoring logic lives here; this is the shared vocabulary of the
//! workspace.

pub mod error;
pub mod models;

/// Number of items on the inventory.
pub const ITEM_COUNT: usize = 40;

/// Highest value a single item response can take.
pub const MAX_RESPONSE: u8 = 3;
