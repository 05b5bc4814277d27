//! CSV codec for card lists.
//!
//! The writer quotes any cell containing a comma, a double quote or
//! whitespace, doubling embedded quotes. The reader is permissive: it never
//! fails on malformed text and returns whatever cells it can recover.
//!
//! # Example
//!
//! ```
//! use deckport_csv::{from_csv, to_csv};
//! use deckport_model::Table;
//!
//! let table = Table::from_iter(vec![vec!["1", "Lightning Bolt"]]);
//! let text = to_csv(&table);
//! assert_eq!(text, "1,\"Lightning Bolt\"");
//! assert_eq!(from_csv(&text), table);
//! ```

#![deny(unsafe_code)]

mod decode;
mod encode;
mod error;
mod file;

// === Error Types ===
pub use error::{CsvError, Result};

// === Codec ===
pub use decode::{Decoder, FieldState, from_csv};
pub use encode::{encode_row, escape_cell, needs_quoting, to_csv};

// === File I/O ===
pub use file::{DEFAULT_EXPORT_FILE_NAME, read_csv_file, write_csv_file};
