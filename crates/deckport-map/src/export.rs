//! Rows to table.

use deckport_csv::to_csv;
use deckport_model::{Row, Table};

use crate::settings::ExportSettings;

/// Lay rows out as a table following the export columns.
pub fn export_table(settings: &ExportSettings, rows: &[Row]) -> Table {
    let mut table = Table::new();
    if settings.write_headers {
        table.push_row(settings.headers());
    }
    for row in rows {
        table.push_row(settings.columns.iter().map(|column| row.get(column.field)));
    }
    tracing::debug!(
        rows = rows.len(),
        columns = settings.columns.len(),
        headers = settings.write_headers,
        "exported rows"
    );
    table
}

/// Lay rows out and encode them as CSV text.
pub fn export_csv(settings: &ExportSettings, rows: &[Row]) -> String {
    to_csv(&export_table(settings, rows))
}
