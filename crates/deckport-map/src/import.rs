//! Table to rows.
//!
//! Import never fails. Rows whose quantity cell is present but not a positive
//! whole number are left out and reported as warnings; an unmapped or blank
//! quantity means one copy.

use std::fmt;

use deckport_csv::from_csv;
use deckport_model::{Row, RowField, Table, parse_quantity};

use crate::settings::ImportSettings;

/// A row under construction: raw cell text for each mapped field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRow {
    pub quantity: Option<String>,
    pub identifier: Option<String>,
    pub card_name: Option<String>,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub language: Option<String>,
    pub finish: Option<String>,
}

impl PartialRow {
    /// Pick mapped cells out of one table row. Columns past the end of the
    /// row leave the field unset.
    pub fn from_cells(settings: &ImportSettings, cells: &[String]) -> Self {
        let mut partial = Self::default();
        for (&field, &column) in &settings.columns {
            if let Some(value) = cells.get(column) {
                partial.set(field, value.clone());
            }
        }
        partial
    }

    pub fn get(&self, field: RowField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: RowField, value: String) {
        *self.slot_mut(field) = Some(value);
    }

    fn slot(&self, field: RowField) -> &Option<String> {
        match field {
            RowField::Quantity => &self.quantity,
            RowField::Identifier => &self.identifier,
            RowField::CardName => &self.card_name,
            RowField::SetCode => &self.set_code,
            RowField::CollectorNumber => &self.collector_number,
            RowField::Language => &self.language,
            RowField::Finish => &self.finish,
        }
    }

    fn slot_mut(&mut self, field: RowField) -> &mut Option<String> {
        match field {
            RowField::Quantity => &mut self.quantity,
            RowField::Identifier => &mut self.identifier,
            RowField::CardName => &mut self.card_name,
            RowField::SetCode => &mut self.set_code,
            RowField::CollectorNumber => &mut self.collector_number,
            RowField::Language => &mut self.language,
            RowField::Finish => &mut self.finish,
        }
    }

    /// Turn the raw cells into a typed row. Unset text fields become empty.
    ///
    /// Fails with the trimmed quantity text when it is not a positive whole
    /// number.
    pub fn finalize(self) -> Result<Row, String> {
        let quantity = match self.quantity.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => parse_quantity(raw).map_err(|_| raw.to_string())?,
        };
        Ok(Row {
            quantity,
            identifier: self.identifier.unwrap_or_default(),
            card_name: self.card_name.unwrap_or_default(),
            set_code: self.set_code.unwrap_or_default(),
            collector_number: self.collector_number.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            finish: self.finish.unwrap_or_default(),
        })
    }
}

/// Something worth telling the user about an import. None of these stop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    /// Not every table row has the same number of cells.
    RaggedRows { min: usize, max: usize },
    /// The quantity cell on `line` (1-based, header included) is not a
    /// positive whole number; the row was left out.
    InvalidQuantity { line: usize, value: String },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows { min, max } => write!(
                f,
                "rows have uneven lengths ({min} to {max} cells); columns may not line up"
            ),
            Self::InvalidQuantity { line, value } => {
                write!(
                    f,
                    "line {line}: quantity '{value}' is not a positive whole number, row skipped"
                )
            }
        }
    }
}

/// Result of mapping a table into rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub rows: Vec<Row>,
    pub warnings: Vec<ImportWarning>,
    /// Rows left out because of an invalid quantity.
    pub skipped: usize,
}

impl ImportOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Map every table row (after the header, when `skip_first` is set) to a row.
pub fn import_table(settings: &ImportSettings, table: &Table) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    let shape = table.shape();
    if shape.is_ragged() {
        tracing::warn!(
            min = shape.min_len,
            max = shape.max_len,
            "rows have uneven lengths"
        );
        outcome.warnings.push(ImportWarning::RaggedRows {
            min: shape.min_len,
            max: shape.max_len,
        });
    }

    let skip = usize::from(settings.skip_first);
    for (idx, cells) in table.rows().iter().enumerate().skip(skip) {
        match PartialRow::from_cells(settings, cells).finalize() {
            Ok(row) => outcome.rows.push(row),
            Err(value) => {
                let line = idx + 1;
                tracing::warn!(line, quantity = %value, "skipping row with invalid quantity");
                outcome
                    .warnings
                    .push(ImportWarning::InvalidQuantity { line, value });
                outcome.skipped += 1;
            }
        }
    }

    tracing::debug!(
        rows = outcome.rows.len(),
        skipped = outcome.skipped,
        "imported table"
    );
    outcome
}

/// Decode CSV text and map it to rows.
pub fn import_csv(settings: &ImportSettings, text: &str) -> ImportOutcome {
    import_table(settings, &from_csv(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn out_of_range_columns_stay_unset() {
        let settings = ImportSettings::preset(Preset::Moxfield);
        let partial = PartialRow::from_cells(&settings, &cells(&["3", "x", "Bolt"]));
        assert_eq!(partial.get(RowField::Quantity), Some("3"));
        assert_eq!(partial.get(RowField::CardName), Some("Bolt"));
        assert_eq!(partial.get(RowField::CollectorNumber), None);
        let row = partial.finalize().unwrap();
        assert_eq!(row.collector_number, "");
    }

    #[test]
    fn shared_column_feeds_both_fields() {
        let mut settings = ImportSettings::default();
        settings.set_column(RowField::CardName, Some(0));
        settings.set_column(RowField::Identifier, Some(0));
        let row = PartialRow::from_cells(&settings, &cells(&["Bolt"]))
            .finalize()
            .unwrap();
        assert_eq!(row.card_name, "Bolt");
        assert_eq!(row.identifier, "Bolt");
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn blank_quantity_means_one() {
        let mut partial = PartialRow::default();
        partial.set(RowField::Quantity, "  ".to_string());
        assert_eq!(partial.finalize().unwrap().quantity, 1);
    }

    #[test]
    fn bad_quantity_is_reported_and_skipped() {
        let outcome = import_csv(
            &ImportSettings::preset(Preset::Default),
            "#,ID,Name\n2,a,Bolt\nlots,b,Shock\n1,c,Opt",
        );
        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(
            outcome.warnings,
            vec![ImportWarning::InvalidQuantity {
                line: 3,
                value: "lots".to_string()
            }]
        );
    }

    #[test]
    fn zero_quantity_is_reported_and_skipped() {
        let outcome = import_csv(
            &ImportSettings::preset(Preset::Default),
            "#,ID,Name\n0,a,Bolt\n3,b,Shock",
        );
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].quantity, 3);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(
            outcome.warnings,
            vec![ImportWarning::InvalidQuantity {
                line: 2,
                value: "0".to_string()
            }]
        );
    }

    #[test]
    fn finalize_reports_the_rejected_text() {
        let mut partial = PartialRow::default();
        partial.set(RowField::Quantity, " many ".to_string());
        assert_eq!(partial.finalize(), Err("many".to_string()));
    }

    #[test]
    fn ragged_tables_warn_but_import() {
        let outcome = import_csv(
            &ImportSettings::preset(Preset::Default),
            "Count,ID\n1,a,Bolt\n2",
        );
        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(
            outcome.warnings,
            vec![ImportWarning::RaggedRows { min: 1, max: 3 }]
        );
        assert_eq!(outcome.rows[1].identifier, "");
    }

    #[test]
    fn without_skip_first_header_is_data() {
        let mut settings = ImportSettings::default();
        settings.set_column(RowField::CardName, Some(0));
        let outcome = import_csv(&settings, "Name\nBolt");
        let names: Vec<&str> = outcome.rows.iter().map(|r| r.card_name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Bolt"]);
    }
}
