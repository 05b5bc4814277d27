//! Mapping between card list rows and positional CSV columns.
//!
//! Import settings say which column feeds each [`RowField`]; export settings
//! list the columns to write, in order, with their header labels. Two
//! built-in [`Preset`]s cover the common layouts and the editors track
//! whether the settings in hand still match one of them.
//!
//! [`RowField`]: deckport_model::RowField

#![deny(unsafe_code)]

pub mod editor;
pub mod error;
pub mod export;
pub mod import;
pub mod preset;
pub mod settings;

pub use editor::{ExportEditor, ImportEditor, PREVIEW_ROWS, column_choices};
pub use error::{MappingError, Result};
pub use export::{export_csv, export_table};
pub use import::{ImportOutcome, ImportWarning, PartialRow, import_csv, import_table};
pub use preset::{Preset, PresetLabel};
pub use settings::{ExportColumn, ExportSettings, ImportSettings};
