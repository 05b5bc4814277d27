//! CSV writer.

use std::borrow::Cow;

use deckport_model::Table;

/// True if the cell must be wrapped in quotes.
///
/// Commas, double quotes and any whitespace (newlines included) trigger
/// quoting. A byte-order mark counts as whitespace, since the reader trims it.
pub fn needs_quoting(cell: &str) -> bool {
    cell.chars()
        .any(|ch| ch == ',' || ch == '"' || ch == '\u{feff}' || ch.is_whitespace())
}

/// Render one cell, quoting it and doubling inner quotes when required.
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if needs_quoting(cell) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Render one row without a line terminator.
pub fn encode_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push(',');
        }
        line.push_str(&escape_cell(cell.as_ref()));
    }
    line
}

/// Render a table. Rows are joined with `\n`; there is no trailing newline.
pub fn to_csv(table: &Table) -> String {
    table
        .rows()
        .iter()
        .map(|row| encode_row(row))
        .collect::<Vec<_>>()
        .join("\n")
}
