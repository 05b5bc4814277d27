use deckport_model::{LookupCard, Row};

use crate::error::{InventoryError, Result};

/// How [`Inventory::add`] treats a row that duplicates an existing printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddMode {
    /// Fold the quantity into the matching row if there is one.
    #[default]
    QuickAdd,
    /// Insert unconditionally. The caller is expected to open an editor on
    /// the new row and finish with [`Inventory::edit`] (which merges) or
    /// [`Inventory::delete`] (which cancels).
    EditFirst,
}

impl AddMode {
    /// Mode selected by the "edit before adding" modifier.
    pub fn from_modifier(held: bool) -> Self {
        if held {
            AddMode::EditFirst
        } else {
            AddMode::QuickAdd
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Quantity added to the existing row at `index`.
    Merged { index: usize },
    /// New row placed at `index`.
    Inserted { index: usize },
}

impl AddOutcome {
    pub fn index(&self) -> usize {
        match self {
            AddOutcome::Merged { index } | AddOutcome::Inserted { index } => *index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The row was replaced in place.
    Replaced { index: usize },
    /// The edit matched another row; its quantity was folded into that row
    /// (now at `index`) and the edited row was removed.
    Merged { index: usize },
}

/// Ordered card list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    rows: Vec<Row>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.rows.iter().map(|row| u64::from(row.quantity)).sum()
    }

    pub fn add(&mut self, row: Row, mode: AddMode) -> AddOutcome {
        if mode == AddMode::QuickAdd
            && let Some(index) = self.find_printing(&row, None)
        {
            let existing = &mut self.rows[index];
            existing.quantity = existing.quantity.saturating_add(row.quantity);
            tracing::debug!(
                index,
                identifier = %existing.identifier,
                quantity = existing.quantity,
                "merged added row"
            );
            return AddOutcome::Merged { index };
        }
        tracing::debug!(identifier = %row.identifier, ?mode, "inserted row");
        self.rows.insert(0, row);
        AddOutcome::Inserted { index: 0 }
    }

    /// Add one copy of a lookup result, starting with its first finish.
    pub fn add_card(&mut self, card: &LookupCard, mode: AddMode) -> Result<AddOutcome> {
        let row = Row::from_card(card)?;
        Ok(self.add(row, mode))
    }

    /// Replace the row at `index`, merging into another row that already
    /// holds the same printing.
    pub fn edit(&mut self, index: usize, row: Row) -> Result<EditOutcome> {
        self.check_index(index)?;
        match self.find_printing(&row, Some(index)) {
            Some(other) => {
                let target = &mut self.rows[other];
                target.quantity = target.quantity.saturating_add(row.quantity);
                self.rows.remove(index);
                let merged = if other > index { other - 1 } else { other };
                tracing::debug!(from = index, into = merged, "merged edited row");
                Ok(EditOutcome::Merged { index: merged })
            }
            None => {
                self.rows[index] = row;
                Ok(EditOutcome::Replaced { index })
            }
        }
    }

    pub fn delete(&mut self, index: usize) -> Result<Row> {
        self.check_index(index)?;
        let row = self.rows.remove(index);
        tracing::debug!(index, identifier = %row.identifier, "deleted row");
        Ok(row)
    }

    /// Swap in a whole new list as-is. No merging takes place.
    pub fn replace_all(&mut self, rows: Vec<Row>) {
        tracing::debug!(previous = self.rows.len(), rows = rows.len(), "replaced inventory");
        self.rows = rows;
    }

    fn find_printing(&self, row: &Row, skip: Option<usize>) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .find(|&(idx, existing)| Some(idx) != skip && existing.same_printing(row))
            .map(|(idx, _)| idx)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(InventoryError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}

impl From<Vec<Row>> for Inventory {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}
