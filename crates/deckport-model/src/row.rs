use serde::{Deserialize, Serialize};

use crate::{LookupCard, ModelError, RowField};

/// One line of a card list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub quantity: u32,
    #[serde(alias = "scryfall_id")]
    pub identifier: String,
    pub card_name: String,
    pub set_code: String,
    pub collector_number: String,
    pub language: String,
    pub finish: String,
}

impl Row {
    /// Build a single-copy row from a lookup result, using its first finish.
    pub fn from_card(card: &LookupCard) -> Result<Self, ModelError> {
        let finish = card
            .default_finish()
            .ok_or_else(|| ModelError::NoFinishes {
                id: card.id.clone(),
            })?;
        Ok(Self {
            quantity: 1,
            identifier: card.id.clone(),
            card_name: card.name.clone(),
            set_code: card.set.clone(),
            collector_number: card.collector_number.clone(),
            language: card.lang.clone(),
            finish: finish.to_string(),
        })
    }

    /// Text of a field as it appears in a CSV cell.
    pub fn get(&self, field: RowField) -> String {
        match field {
            RowField::Quantity => self.quantity.to_string(),
            RowField::Identifier => self.identifier.clone(),
            RowField::CardName => self.card_name.clone(),
            RowField::SetCode => self.set_code.clone(),
            RowField::CollectorNumber => self.collector_number.clone(),
            RowField::Language => self.language.clone(),
            RowField::Finish => self.finish.clone(),
        }
    }

    /// Rows sharing this key describe the same printing and are merged on add/edit.
    pub fn merge_key(&self) -> (&str, &str) {
        (&self.identifier, &self.finish)
    }

    pub fn same_printing(&self, other: &Row) -> bool {
        self.merge_key() == other.merge_key()
    }
}

/// Parse a quantity cell. Surrounding whitespace is ignored; zero is rejected
/// because a row always stands for at least one card.
pub fn parse_quantity(raw: &str) -> Result<u32, ModelError> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(ModelError::InvalidQuantity(raw.to_string())),
    }
}
