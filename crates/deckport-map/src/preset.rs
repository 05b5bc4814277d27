//! Built-in import/export layouts.
//!
//! Every call builds a fresh value, so editing the settings you were handed
//! can never change what the next caller gets.

use std::fmt;
use std::str::FromStr;

use deckport_model::RowField;

use crate::MappingError;
use crate::settings::{ExportColumn, ExportSettings, ImportSettings};

/// A named, built-in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// This tool's own layout, identifier column included.
    Default,
    /// Moxfield collection CSV. Has no identifier column.
    Moxfield,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Default, Preset::Moxfield];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "Default",
            Preset::Moxfield => "Moxfield",
        }
    }

    pub fn import_settings(&self) -> ImportSettings {
        let columns: &[(RowField, usize)] = match self {
            Preset::Default => &[
                (RowField::Quantity, 0),
                (RowField::Identifier, 1),
                (RowField::CardName, 2),
                (RowField::SetCode, 3),
                (RowField::CollectorNumber, 4),
                (RowField::Language, 5),
                (RowField::Finish, 6),
            ],
            Preset::Moxfield => &[
                (RowField::Quantity, 0),
                (RowField::CardName, 2),
                (RowField::SetCode, 3),
                (RowField::CollectorNumber, 9),
                (RowField::Language, 5),
                (RowField::Finish, 6),
            ],
        };
        ImportSettings {
            skip_first: true,
            columns: columns.iter().copied().collect(),
        }
    }

    pub fn export_settings(&self) -> ExportSettings {
        let columns: &[(RowField, &str)] = match self {
            Preset::Default => &[
                (RowField::Quantity, "#"),
                (RowField::Identifier, "Scryfall ID"),
                (RowField::CardName, "Name"),
                (RowField::SetCode, "Set"),
                (RowField::CollectorNumber, "Num"),
                (RowField::Language, "Lang"),
                (RowField::Finish, "Finish"),
            ],
            Preset::Moxfield => &[
                (RowField::Quantity, "Count"),
                (RowField::CardName, "Name"),
                (RowField::SetCode, "Edition"),
                (RowField::Language, "Language"),
                (RowField::Finish, "Foil"),
                (RowField::CollectorNumber, "Collector Number"),
            ],
        };
        ExportSettings {
            write_headers: true,
            columns: columns
                .iter()
                .map(|&(field, header)| ExportColumn::new(field, header))
                .collect(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MappingError::UnknownPreset(s.to_string()))
    }
}

impl ImportSettings {
    pub fn preset(preset: Preset) -> Self {
        preset.import_settings()
    }
}

impl ExportSettings {
    pub fn preset(preset: Preset) -> Self {
        preset.export_settings()
    }
}

/// What an editor shows as the active preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetLabel {
    Named(Preset),
    /// Settings edited away from (or never matching) a built-in layout.
    Custom,
}

impl PresetLabel {
    /// The preset whose import layout equals `settings`, if any.
    pub fn identify_import(settings: &ImportSettings) -> Self {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.import_settings() == *settings)
            .map_or(PresetLabel::Custom, PresetLabel::Named)
    }

    /// The preset whose export layout equals `settings`, if any.
    pub fn identify_export(settings: &ExportSettings) -> Self {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.export_settings() == *settings)
            .map_or(PresetLabel::Custom, PresetLabel::Named)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PresetLabel::Named(preset) => preset.name(),
            PresetLabel::Custom => "Custom",
        }
    }
}

impl fmt::Display for PresetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetLabel {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("custom") {
            Ok(PresetLabel::Custom)
        } else {
            s.parse().map(PresetLabel::Named)
        }
    }
}
