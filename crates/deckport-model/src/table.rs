//! The untyped cell grid exchanged between the CSV codec and the mapper.

use serde::{Deserialize, Serialize};

/// Rows of string cells, in input order.
///
/// Rows may have different lengths. Readers must treat a missing cell as
/// absent rather than indexing blindly; [`Table::cell`] does that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

/// Shortest and longest row length of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableShape {
    pub min_len: usize,
    pub max_len: usize,
}

impl TableShape {
    pub fn is_ragged(&self) -> bool {
        self.min_len != self.max_len
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Cell at `(row, col)`, or `None` when either index is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
    }

    pub fn shape(&self) -> TableShape {
        let mut lengths = self.rows.iter().map(Vec::len);
        let Some(first) = lengths.next() else {
            return TableShape::default();
        };
        lengths.fold(
            TableShape {
                min_len: first,
                max_len: first,
            },
            |shape, len| TableShape {
                min_len: shape.min_len.min(len),
                max_len: shape.max_len.max(len),
            },
        )
    }

    /// The first `n` rows.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Label for a column choice in a mapping editor.
    ///
    /// The first row is assumed to be a header row; when it has a non-empty
    /// cell at `col` that text is shown alongside the index.
    pub fn column_label(&self, col: Option<usize>) -> String {
        let Some(col) = col else {
            return "None".to_string();
        };
        match self.cell(0, col) {
            Some(header) if !header.is_empty() => format!("Column {col} ({header})"),
            _ => format!("Column {col}"),
        }
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for Table {
    fn from_iter<T: IntoIterator<Item = Vec<S>>>(iter: T) -> Self {
        Self {
            rows: iter
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_iter(vec![
            vec!["Count", "Name", ""],
            vec!["1", "Bolt"],
            vec!["2", "Shock", "m10", "extra"],
        ])
    }

    #[test]
    fn shape_reports_ragged_rows() {
        let shape = sample().shape();
        assert_eq!(shape.min_len, 2);
        assert_eq!(shape.max_len, 4);
        assert!(shape.is_ragged());
        assert!(!Table::new().shape().is_ragged());
    }

    #[test]
    fn cell_guards_out_of_range() {
        let table = sample();
        assert_eq!(table.cell(1, 1), Some("Bolt"));
        assert_eq!(table.cell(1, 2), None);
        assert_eq!(table.cell(9, 0), None);
    }

    #[test]
    fn column_labels_use_first_row() {
        let table = sample();
        assert_eq!(table.column_label(None), "None");
        assert_eq!(table.column_label(Some(1)), "Column 1 (Name)");
        assert_eq!(table.column_label(Some(2)), "Column 2");
        assert_eq!(table.column_label(Some(7)), "Column 7");
    }

    #[test]
    fn preview_is_clamped() {
        let table = sample();
        assert_eq!(table.preview(2).len(), 2);
        assert_eq!(table.preview(10).len(), 3);
    }
}
