//! The recognised columns of a card list row.
//!
//! Field order is significant: it is the display order of the card table and
//! the order every mapping editor iterates over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// One field of a [`Row`](crate::Row).
///
/// Declaration order matches [`RowField::ALL`], so the derived `Ord` sorts
/// fields the same way the table displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
    /// Number of copies.
    Quantity,
    /// Stable card reference from the lookup service.
    #[serde(alias = "scryfall_id")]
    Identifier,
    /// Display name of the card.
    CardName,
    /// Short code of the printing's set.
    SetCode,
    /// Collector number within the set. Not necessarily numeric.
    CollectorNumber,
    /// Printing language code.
    Language,
    /// Printing treatment, e.g. `nonfoil`, `foil`, `etched`.
    Finish,
}

impl RowField {
    /// All fields in display order.
    pub const ALL: [RowField; 7] = [
        RowField::Quantity,
        RowField::Identifier,
        RowField::CardName,
        RowField::SetCode,
        RowField::CollectorNumber,
        RowField::Language,
        RowField::Finish,
    ];

    /// Returns the stable key used in settings files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            RowField::Quantity => "quantity",
            RowField::Identifier => "identifier",
            RowField::CardName => "card_name",
            RowField::SetCode => "set_code",
            RowField::CollectorNumber => "collector_number",
            RowField::Language => "language",
            RowField::Finish => "finish",
        }
    }

    /// Position of this field in [`RowField::ALL`].
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RowField {
    type Err = ModelError;

    /// Parse a field key (case-insensitive). `scryfall_id` is accepted for
    /// [`RowField::Identifier`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "scryfall_id" => Ok(RowField::Identifier),
            other => RowField::ALL
                .into_iter()
                .find(|field| field.key() == other)
                .ok_or_else(|| ModelError::UnknownField(s.to_string())),
        }
    }
}
