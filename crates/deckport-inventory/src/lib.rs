//! The session's card list.
//!
//! Adding and editing keep at most one row per `(identifier, finish)` pair
//! by folding quantities together. Bulk replacement (used by import) copies
//! rows in as given, duplicates included.

#![deny(unsafe_code)]

mod error;
mod store;

pub use error::{InventoryError, Result};
pub use store::{AddMode, AddOutcome, EditOutcome, Inventory};
