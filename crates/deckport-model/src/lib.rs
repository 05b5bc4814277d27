//! Data model shared by the deckport crates.
//!
//! A [`Row`] is one line of a card list. [`RowField`] enumerates its columns
//! in display order, and [`Table`] is the untyped grid of string cells that
//! moves between the CSV codec and the mapping engine.

#![deny(unsafe_code)]

pub mod card;
pub mod error;
pub mod field;
pub mod row;
pub mod table;

pub use card::LookupCard;
pub use error::{ModelError, Result};
pub use field::RowField;
pub use row::{Row, parse_quantity};
pub use table::{Table, TableShape};
