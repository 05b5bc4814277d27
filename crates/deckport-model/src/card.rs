//! Card objects handed over by the card lookup service.

use serde::{Deserialize, Serialize};

/// A card as returned by the lookup service.
///
/// Only the fields a list row needs are kept; any other keys in the service's
/// JSON are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupCard {
    /// Stable card identifier.
    pub id: String,
    pub name: String,
    /// Set code.
    pub set: String,
    pub collector_number: String,
    /// Language code.
    pub lang: String,
    /// Available finishes, preferred first.
    pub finishes: Vec<String>,
}

impl LookupCard {
    /// The finish a freshly added row starts with.
    pub fn default_finish(&self) -> Option<&str> {
        self.finishes.first().map(String::as_str)
    }
}
