//! Resolve import/export settings from CLI flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use deckport_map::{ExportEditor, ExportSettings, ImportEditor, ImportSettings, Preset, PresetLabel};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::cli::{ExportArgs, ImportArgs};

/// Import settings in force, and the preset they correspond to.
#[derive(Debug, Clone)]
pub struct ResolvedImport {
    pub label: PresetLabel,
    pub settings: ImportSettings,
}

#[derive(Debug, Clone)]
pub struct ResolvedExport {
    pub label: PresetLabel,
    pub settings: ExportSettings,
}

/// Settings file if given, otherwise the chosen preset (Default when none),
/// then `--no-skip-first` on top.
pub fn resolve_import_settings(args: &ImportArgs) -> Result<ResolvedImport> {
    let mut editor = match &args.import_settings {
        Some(path) => ImportEditor::from_settings(load_settings_file(path)?),
        None => ImportEditor::new(args.import_preset.map_or(Preset::Default, Preset::from)),
    };
    if args.no_skip_first && editor.settings().skip_first {
        editor.toggle_skip_first();
    }
    let label = editor.label();
    info!(preset = %label, "import settings");
    Ok(ResolvedImport {
        label,
        settings: editor.finish(),
    })
}

pub fn resolve_export_settings(args: &ExportArgs) -> Result<ResolvedExport> {
    let mut editor = match &args.export_settings {
        Some(path) => ExportEditor::from_settings(load_settings_file(path)?),
        None => ExportEditor::new(args.export_preset.map_or(Preset::Default, Preset::from)),
    };
    if args.no_headers && editor.settings().write_headers {
        editor.toggle_headers();
    }
    let label = editor.label();
    info!(preset = %label, "export settings");
    Ok(ResolvedExport {
        label,
        settings: editor.finish(),
    })
}

fn load_settings_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse settings file {}", path.display()))
}
