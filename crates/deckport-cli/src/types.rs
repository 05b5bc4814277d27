use std::fmt;
use std::path::PathBuf;

use deckport_map::{ImportWarning, PresetLabel};
use deckport_model::{RowField, TableShape};

/// Where an exported list went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub import_label: PresetLabel,
    pub export_label: PresetLabel,
    pub rows: usize,
    pub total_quantity: u64,
    pub skipped: usize,
    pub warnings: Vec<ImportWarning>,
}

#[derive(Debug, Clone)]
pub struct AddReport {
    pub output: OutputTarget,
    pub export_label: PresetLabel,
    /// Cards that became new rows.
    pub inserted: usize,
    /// Cards folded into a row already in the list.
    pub merged: usize,
    /// Names of cards that could not be added (no finishes).
    pub rejected: Vec<String>,
    pub rows: usize,
    pub total_quantity: u64,
    pub warnings: Vec<ImportWarning>,
}

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub input: PathBuf,
    pub import_label: PresetLabel,
    pub shape: TableShape,
    pub table_rows: usize,
    pub preview: Vec<Vec<String>>,
    pub column_choices: Vec<String>,
    /// Each field with the column label it is read from.
    pub mapping: Vec<(RowField, String)>,
    pub imported: usize,
    pub warnings: Vec<ImportWarning>,
}
