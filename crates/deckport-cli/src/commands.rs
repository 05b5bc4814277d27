use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use deckport_csv::{DEFAULT_EXPORT_FILE_NAME, read_csv_file, to_csv, write_csv_file};
use deckport_inventory::{AddMode, AddOutcome, Inventory, InventoryError};
use deckport_map::{column_choices, export_table, import_table};
use deckport_model::{LookupCard, RowField, Table};
use serde::Deserialize;
use tracing::{debug, info, info_span, warn};

use crate::cli::{AddArgs, ConvertArgs, InspectArgs};
use crate::config::{resolve_export_settings, resolve_import_settings};
use crate::render::print_presets;
use crate::types::{AddReport, ConvertReport, InspectReport, OutputTarget};

/// Card lookup output in any of the shapes the service returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardsFile {
    List { data: Vec<LookupCard> },
    Many(Vec<LookupCard>),
    One(LookupCard),
}

impl CardsFile {
    fn into_cards(self) -> Vec<LookupCard> {
        match self {
            CardsFile::List { data } => data,
            CardsFile::Many(cards) => cards,
            CardsFile::One(card) => vec![card],
        }
    }
}

pub fn run_presets() -> Result<()> {
    print_presets();
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertReport> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let import = resolve_import_settings(&args.import)?;
    let export = resolve_export_settings(&args.export)?;

    let table = read_csv_file(&args.input).context("read input list")?;
    let outcome = import_table(&import.settings, &table);

    let mut inventory = Inventory::new();
    inventory.replace_all(outcome.rows);
    info!(rows = inventory.len(), skipped = outcome.skipped, "imported list");

    let output = write_output(
        args.output.as_deref(),
        &export_table(&export.settings, inventory.rows()),
    )?;

    Ok(ConvertReport {
        input: args.input.clone(),
        output,
        import_label: import.label,
        export_label: export.label,
        rows: inventory.len(),
        total_quantity: inventory.total_quantity(),
        skipped: outcome.skipped,
        warnings: outcome.warnings,
    })
}

pub fn run_add(args: &AddArgs) -> Result<AddReport> {
    let span = info_span!("add", cards = %args.cards.display());
    let _guard = span.enter();

    let import = resolve_import_settings(&args.import)?;
    let export = resolve_export_settings(&args.export)?;

    let mut warnings = Vec::new();
    let mut inventory = match &args.into {
        Some(path) => {
            let table = read_csv_file(path).context("read existing list")?;
            let outcome = import_table(&import.settings, &table);
            warnings = outcome.warnings;
            Inventory::from(outcome.rows)
        }
        None => Inventory::new(),
    };

    let cards = load_cards(&args.cards)?;
    debug!(cards = cards.len(), existing = inventory.len(), "adding cards");

    let mut inserted = 0;
    let mut merged = 0;
    let mut rejected = Vec::new();
    for card in &cards {
        match inventory.add_card(card, AddMode::QuickAdd) {
            Ok(AddOutcome::Inserted { .. }) => inserted += 1,
            Ok(AddOutcome::Merged { .. }) => merged += 1,
            Err(InventoryError::Model(error)) => {
                warn!(card = %card.name, %error, "card not added");
                rejected.push(card.name.clone());
            }
            Err(error) => return Err(error.into()),
        }
    }
    info!(inserted, merged, rejected = rejected.len(), "added cards");

    let output = write_output(
        args.output.as_deref(),
        &export_table(&export.settings, inventory.rows()),
    )?;

    Ok(AddReport {
        output,
        export_label: export.label,
        inserted,
        merged,
        rejected,
        rows: inventory.len(),
        total_quantity: inventory.total_quantity(),
        warnings,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectReport> {
    let import = resolve_import_settings(&args.import)?;
    let table = read_csv_file(&args.input).context("read input list")?;
    let outcome = import_table(&import.settings, &table);

    let mapping = RowField::ALL
        .into_iter()
        .map(|field| (field, table.column_label(import.settings.column(field))))
        .collect();

    Ok(InspectReport {
        input: args.input.clone(),
        import_label: import.label,
        shape: table.shape(),
        table_rows: table.len(),
        preview: table.preview(args.rows).to_vec(),
        column_choices: column_choices(&table),
        mapping,
        imported: outcome.rows.len(),
        warnings: outcome.warnings,
    })
}

fn load_cards(path: &Path) -> Result<Vec<LookupCard>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read cards file {}", path.display()))?;
    let file: CardsFile = serde_json::from_str(&text)
        .with_context(|| format!("parse cards file {}", path.display()))?;
    Ok(file.into_cards())
}

/// Write the exported table to `output`; `-` means stdout, `None` the
/// default file name in the working directory.
fn write_output(output: Option<&Path>, table: &Table) -> Result<OutputTarget> {
    match output {
        Some(path) if path == Path::new("-") => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(to_csv(table).as_bytes())
                .and_then(|()| stdout.flush())
                .context("write list to stdout")?;
            Ok(OutputTarget::Stdout)
        }
        other => {
            let path = other.unwrap_or(Path::new(DEFAULT_EXPORT_FILE_NAME));
            write_csv_file(path, table).context("write output list")?;
            info!(path = %path.display(), rows = table.len(), "wrote list");
            Ok(OutputTarget::File(path.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_file_accepts_every_shape() {
        let card = r#"{"id":"X","name":"Bolt","set":"lea","collector_number":"161","lang":"en","finishes":["nonfoil"],"rarity":"common"}"#;
        let one: CardsFile = serde_json::from_str(card).unwrap();
        assert_eq!(one.into_cards().len(), 1);

        let many: CardsFile = serde_json::from_str(&format!("[{card},{card}]")).unwrap();
        assert_eq!(many.into_cards().len(), 2);

        let list: CardsFile =
            serde_json::from_str(&format!(r#"{{"object":"list","data":[{card}]}}"#)).unwrap();
        assert_eq!(list.into_cards()[0].id, "X");
    }
}
