//! Editing state for import and export settings.
//!
//! An editor owns its settings outright. Choosing a preset copies that
//! preset in; any edit afterwards flips the label to [`PresetLabel::Custom`].

use deckport_model::{RowField, Table};

use crate::error::{MappingError, Result};
use crate::preset::{Preset, PresetLabel};
use crate::settings::{ExportColumn, ExportSettings, ImportSettings};

/// Number of input rows shown in an import preview.
pub const PREVIEW_ROWS: usize = 3;

/// Choices offered for an import column picker: `None` followed by every
/// column of the widest row, labelled with the first row's text.
pub fn column_choices(table: &Table) -> Vec<String> {
    let width = table.shape().max_len;
    std::iter::once(table.column_label(None))
        .chain((0..width).map(|col| table.column_label(Some(col))))
        .collect()
}

/// Import settings being edited.
#[derive(Debug, Clone)]
pub struct ImportEditor {
    label: PresetLabel,
    settings: ImportSettings,
}

impl Default for ImportEditor {
    fn default() -> Self {
        Self::new(Preset::Default)
    }
}

impl ImportEditor {
    pub fn new(preset: Preset) -> Self {
        Self {
            label: PresetLabel::Named(preset),
            settings: preset.import_settings(),
        }
    }

    /// Start from existing settings, labelled with the preset they match.
    pub fn from_settings(settings: ImportSettings) -> Self {
        Self {
            label: PresetLabel::identify_import(&settings),
            settings,
        }
    }

    pub fn label(&self) -> PresetLabel {
        self.label
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Switch presets. Choosing `Custom` keeps the current settings.
    pub fn select(&mut self, label: PresetLabel) {
        self.label = label;
        if let PresetLabel::Named(preset) = label {
            self.settings = preset.import_settings();
        }
    }

    pub fn toggle_skip_first(&mut self) {
        self.settings.skip_first = !self.settings.skip_first;
        self.label = PresetLabel::Custom;
    }

    pub fn set_column(&mut self, field: RowField, column: Option<usize>) {
        self.settings.set_column(field, column);
        self.label = PresetLabel::Custom;
    }

    pub fn finish(self) -> ImportSettings {
        self.settings
    }
}

/// Export settings being edited.
#[derive(Debug, Clone)]
pub struct ExportEditor {
    label: PresetLabel,
    settings: ExportSettings,
}

impl Default for ExportEditor {
    fn default() -> Self {
        Self::new(Preset::Default)
    }
}

impl ExportEditor {
    pub fn new(preset: Preset) -> Self {
        Self {
            label: PresetLabel::Named(preset),
            settings: preset.export_settings(),
        }
    }

    pub fn from_settings(settings: ExportSettings) -> Self {
        Self {
            label: PresetLabel::identify_export(&settings),
            settings,
        }
    }

    pub fn label(&self) -> PresetLabel {
        self.label
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn select(&mut self, label: PresetLabel) {
        self.label = label;
        if let PresetLabel::Named(preset) = label {
            self.settings = preset.export_settings();
        }
    }

    pub fn toggle_headers(&mut self) {
        self.settings.write_headers = !self.settings.write_headers;
        self.label = PresetLabel::Custom;
    }

    pub fn set_column_field(&mut self, index: usize, field: RowField) -> Result<()> {
        self.column_mut(index)?.field = field;
        self.label = PresetLabel::Custom;
        Ok(())
    }

    pub fn set_column_header(&mut self, index: usize, header: impl Into<String>) -> Result<()> {
        self.column_mut(index)?.header = header.into();
        self.label = PresetLabel::Custom;
        Ok(())
    }

    pub fn delete_column(&mut self, index: usize) -> Result<ExportColumn> {
        let len = self.settings.columns.len();
        if index >= len {
            return Err(MappingError::ColumnOutOfRange { index, len });
        }
        self.label = PresetLabel::Custom;
        Ok(self.settings.columns.remove(index))
    }

    /// Append a column for the first field with an empty header.
    pub fn add_column(&mut self) {
        self.settings
            .columns
            .push(ExportColumn::new(RowField::ALL[0], ""));
        self.label = PresetLabel::Custom;
    }

    pub fn finish(self) -> ExportSettings {
        self.settings
    }

    fn column_mut(&mut self, index: usize) -> Result<&mut ExportColumn> {
        let len = self.settings.columns.len();
        self.settings
            .columns
            .get_mut(index)
            .ok_or(MappingError::ColumnOutOfRange { index, len })
    }
}
