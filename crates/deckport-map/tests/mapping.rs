//! End-to-end mapping through CSV text.

use deckport_map::{
    ExportColumn, ExportEditor, ExportSettings, ImportEditor, ImportSettings, Preset,
    PresetLabel, export_csv, import_csv,
};
use deckport_model::{Row, RowField};

fn row(quantity: u32, identifier: &str, name: &str, set: &str, cn: &str, finish: &str) -> Row {
    Row {
        quantity,
        identifier: identifier.to_string(),
        card_name: name.to_string(),
        set_code: set.to_string(),
        collector_number: cn.to_string(),
        language: "en".to_string(),
        finish: finish.to_string(),
    }
}

fn sample_rows() -> Vec<Row> {
    vec![
        row(2, "e3285e6b", "Lightning Bolt", "lea", "161", "nonfoil"),
        row(1, "0000579f", "Fury Sliver", "tsp", "157", "foil"),
    ]
}

#[test]
fn default_preset_export() {
    let rows = vec![row(2, "abc", "Bolt", "lea", "1", "nonfoil")];
    let csv = export_csv(&ExportSettings::preset(Preset::Default), &rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "#,\"Scryfall ID\",Name,Set,Num,Lang,Finish");
    assert_eq!(lines[1], "2,abc,Bolt,lea,1,en,nonfoil");
}

#[test]
fn moxfield_preset_export() {
    let csv = export_csv(&ExportSettings::preset(Preset::Moxfield), &sample_rows());
    insta::assert_snapshot!(csv, @r#"
Count,Name,Edition,Language,Foil,"Collector Number"
2,"Lightning Bolt",lea,en,nonfoil,161
1,"Fury Sliver",tsp,en,foil,157
"#);
}

#[test]
fn default_preset_round_trips() {
    let rows = sample_rows();
    let csv = export_csv(&ExportSettings::preset(Preset::Default), &rows);
    let outcome = import_csv(&ImportSettings::preset(Preset::Default), &csv);
    assert!(!outcome.has_warnings());
    assert_eq!(outcome.rows, rows);
}

#[test]
fn moxfield_collection_import() {
    let text = "\"Count\",\"Tradelist Count\",\"Name\",\"Edition\",\"Condition\",\"Language\",\"Foil\",\"Tags\",\"Last Modified\",\"Collector Number\"\n\
                \"4\",\"0\",\"Lightning Bolt\",\"2x2\",\"Near Mint\",\"en\",\"\",\"\",\"2024-01-05 10:00:00\",\"117\"\n\
                \"1\",\"1\",\"Counterspell\",\"mh2\",\"Near Mint\",\"en\",\"foil\",\"\",\"2024-01-05 10:00:00\",\"267\"\n";
    let outcome = import_csv(&ImportSettings::preset(Preset::Moxfield), text);
    assert!(!outcome.has_warnings());
    assert_eq!(outcome.rows.len(), 2);
    let bolt = &outcome.rows[0];
    assert_eq!(bolt.quantity, 4);
    assert_eq!(bolt.card_name, "Lightning Bolt");
    assert_eq!(bolt.set_code, "2x2");
    assert_eq!(bolt.collector_number, "117");
    assert_eq!(bolt.identifier, "");
    assert_eq!(outcome.rows[1].finish, "foil");
}

#[test]
fn custom_layout_round_trips_through_matching_import() {
    let mut editor = ExportEditor::new(Preset::Moxfield);
    editor.add_column();
    editor.set_column_field(6, RowField::Identifier).unwrap();
    editor.set_column_header(6, "Card \"ID\"").unwrap();
    editor.toggle_headers();
    assert_eq!(editor.label(), PresetLabel::Custom);
    let export = editor.finish();

    let rows = sample_rows();
    let csv = export_csv(&export, &rows);
    let outcome = import_csv(&export.to_import_settings(), &csv);
    assert_eq!(outcome.rows, rows);
}

#[test]
fn every_preset_round_trips_through_matching_import() {
    for preset in Preset::ALL {
        let export = ExportSettings::preset(preset);
        let import = export.to_import_settings();
        let rows = sample_rows();
        let outcome = import_csv(&import, &export_csv(&export, &rows));
        for (got, want) in outcome.rows.iter().zip(&rows) {
            for column in &export.columns {
                assert_eq!(got.get(column.field), want.get(column.field), "{preset}");
            }
        }
        assert_eq!(outcome.rows.len(), rows.len());
    }
}

#[test]
fn duplicated_export_column_is_harmless_on_import() {
    let export = ExportSettings {
        write_headers: false,
        columns: vec![
            ExportColumn::new(RowField::Quantity, "Qty"),
            ExportColumn::new(RowField::CardName, "Name"),
            ExportColumn::new(RowField::CardName, "Display Name"),
        ],
    };
    let csv = export_csv(&export, &sample_rows());
    assert_eq!(csv, "2,\"Lightning Bolt\",\"Lightning Bolt\"\n1,\"Fury Sliver\",\"Fury Sliver\"");
    let outcome = import_csv(&export.to_import_settings(), &csv);
    assert_eq!(outcome.rows[1].card_name, "Fury Sliver");
}

#[test]
fn edited_import_settings_do_not_leak_into_presets() {
    let mut editor = ImportEditor::new(Preset::Default);
    editor.set_column(RowField::Quantity, None);
    editor.toggle_skip_first();
    let custom = editor.finish();
    assert_ne!(custom, ImportSettings::preset(Preset::Default));
    assert_eq!(
        ImportSettings::preset(Preset::Default).column(RowField::Quantity),
        Some(0)
    );
}
