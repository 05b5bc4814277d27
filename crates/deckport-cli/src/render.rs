//! Terminal output for command reports.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deckport_map::{ImportWarning, Preset};
use deckport_model::RowField;

use crate::types::{AddReport, ConvertReport, InspectReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Built-in presets: import column per field, export headers in order.
pub fn presets_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("Field")];
    header.extend(Preset::ALL.iter().map(|preset| header_cell(preset.name())));
    table.set_header(header);

    for field in RowField::ALL {
        let mut row = vec![Cell::new(field.key())];
        for preset in Preset::ALL {
            let settings = preset.import_settings();
            row.push(match settings.column(field) {
                Some(col) => Cell::new(col),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }

    let mut headers_row = vec![Cell::new("export headers").add_attribute(Attribute::Bold)];
    headers_row.extend(
        Preset::ALL
            .iter()
            .map(|preset| Cell::new(preset.export_settings().headers().join(", "))),
    );
    table.add_row(headers_row);
    for col in 1..=Preset::ALL.len() {
        align_column(&mut table, col, CellAlignment::Center);
    }
    table
}

pub fn print_presets() {
    println!("{}", presets_table());
}

pub fn print_convert_summary(out: &mut impl Write, report: &ConvertReport) -> io::Result<()> {
    writeln!(out, "Input: {}", report.input.display())?;
    writeln!(out, "Output: {}", report.output)?;
    let mut table = summary_table();
    table.add_row(vec![Cell::new("Import preset"), Cell::new(report.import_label)]);
    table.add_row(vec![Cell::new("Export preset"), Cell::new(report.export_label)]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Cards"), Cell::new(report.total_quantity)]);
    table.add_row(vec![
        Cell::new("Skipped rows"),
        count_cell(report.skipped, Color::Yellow),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    writeln!(out, "{table}")?;
    print_warnings(out, &report.warnings)
}

pub fn print_add_summary(out: &mut impl Write, report: &AddReport) -> io::Result<()> {
    writeln!(out, "Output: {}", report.output)?;
    let mut table = summary_table();
    table.add_row(vec![Cell::new("Export preset"), Cell::new(report.export_label)]);
    table.add_row(vec![Cell::new("New rows"), Cell::new(report.inserted)]);
    table.add_row(vec![Cell::new("Merged"), Cell::new(report.merged)]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(report.rejected.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL rows").add_attribute(Attribute::Bold),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL cards").add_attribute(Attribute::Bold),
        Cell::new(report.total_quantity).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    writeln!(out, "{table}")?;
    for name in &report.rejected {
        writeln!(out, "warning: {name} has no finishes and was not added")?;
    }
    print_warnings(out, &report.warnings)
}

pub fn print_inspect(out: &mut impl Write, report: &InspectReport) -> io::Result<()> {
    writeln!(out, "Input: {}", report.input.display())?;
    writeln!(
        out,
        "Rows: {} ({} to {} cells)",
        report.table_rows, report.shape.min_len, report.shape.max_len
    )?;

    let mut preview = Table::new();
    apply_table_style(&mut preview);
    preview.set_header(
        (0..report.shape.max_len)
            .map(|col| header_cell(&col.to_string()))
            .collect::<Vec<_>>(),
    );
    for cells in &report.preview {
        preview.add_row(cells.iter().map(Cell::new).collect::<Vec<_>>());
    }
    writeln!(out, "{preview}")?;

    writeln!(out, "Columns: {}", report.column_choices.join(", "))?;

    let mut mapping = Table::new();
    apply_table_style(&mut mapping);
    mapping.set_header(vec![
        header_cell("Field"),
        header_cell(&format!("Source ({})", report.import_label)),
    ]);
    for (field, source) in &report.mapping {
        let source = if source == "None" {
            dim_cell(source)
        } else {
            Cell::new(source)
        };
        mapping.add_row(vec![Cell::new(field.key()), source]);
    }
    writeln!(out, "{mapping}")?;
    writeln!(out, "Importable rows: {}", report.imported)?;
    print_warnings(out, &report.warnings)
}

fn print_warnings(out: &mut impl Write, warnings: &[ImportWarning]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}

fn summary_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
