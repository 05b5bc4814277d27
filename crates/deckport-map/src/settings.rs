//! Import and export column settings.

use std::collections::BTreeMap;

use deckport_model::RowField;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which CSV column feeds each row field.
///
/// Fields without an entry are left unset on import. Two fields may read the
/// same column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Treat the first table row as a header and skip it.
    #[serde(default)]
    pub skip_first: bool,
    /// Field to zero-based column index.
    #[serde(default)]
    pub columns: BTreeMap<RowField, usize>,
}

impl ImportSettings {
    pub fn column(&self, field: RowField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Map `field` to `column`, or unmap it with `None`.
    pub fn set_column(&mut self, field: RowField, column: Option<usize>) {
        match column {
            Some(index) => {
                self.columns.insert(field, index);
            }
            None => {
                self.columns.remove(&field);
            }
        }
    }

    /// Parse settings from JSON, e.g. `{"skip_first": true, "columns": {"quantity": 0}}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One output column: the field to write and its header label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportColumn {
    pub field: RowField,
    pub header: String,
}

impl ExportColumn {
    pub fn new(field: RowField, header: impl Into<String>) -> Self {
        Self {
            field,
            header: header.into(),
        }
    }
}

/// Output columns in order. A field may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Write a header row of column labels first.
    #[serde(default)]
    pub write_headers: bool,
    #[serde(default)]
    pub columns: Vec<ExportColumn>,
}

impl ExportSettings {
    /// Header labels in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.header.as_str())
            .collect()
    }

    /// Import settings that read back what these settings write.
    ///
    /// A field listed more than once is read from its first column.
    pub fn to_import_settings(&self) -> ImportSettings {
        let mut columns = BTreeMap::new();
        for (index, column) in self.columns.iter().enumerate() {
            columns.entry(column.field).or_insert(index);
        }
        ImportSettings {
            skip_first: self.write_headers,
            columns,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
