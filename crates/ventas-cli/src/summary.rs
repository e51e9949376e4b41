//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::run::CleanReport;

/// Print the per-step summary for a completed run.
pub fn print_summary(report: &CleanReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Rows"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for step in &report.steps {
        let status = if step.skipped {
            Cell::new("skipped").fg(Color::Yellow)
        } else {
            Cell::new("applied")
        };
        table.add_row(vec![
            Cell::new(step.name),
            Cell::new(step.rows),
            status,
        ]);
    }
    println!("{table}");
    println!(
        "{} -> {} rows, written to {}",
        report.input_rows,
        report.output_rows,
        report.output.display()
    );
}

/// Apply the shared table style.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
