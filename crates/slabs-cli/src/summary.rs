//! Console summary of a sweep run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use slabs_model::{ColumnOutcome, SweepReport};

use crate::pipeline::SweepRun;

pub fn print_summary(run: &SweepRun) {
    println!("Input: {}", run.input.display());
    println!("{}", file_info_table(&run.report));
    println!("{}", column_table(&run.report));
    if !run.report.skipped.is_empty() {
        println!("Skipped (not in file): {}", run.report.skipped.join(", "));
    }
    println!("Output: {}", run.output.display());
}

/// Rows, columns, and reference code count.
pub fn file_info_table(report: &SweepReport) -> Table {
    let mut table = Table::new();
    apply_summary_table_style(&mut table);
    table.set_header(vec![header_cell("File info"), header_cell("Count")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(report.columns)]);
    table.add_row(vec![
        Cell::new("Unique outlet codes"),
        Cell::new(report.reference_codes).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Per-column counts with a total row.
pub fn column_table(report: &SweepReport) -> Table {
    let mut table = Table::new();
    apply_summary_table_style(&mut table);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Original"),
        header_cell("Removed"),
        header_cell("Remaining"),
    ]);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for outcome in &report.outcomes {
        table.add_row(outcome_row(outcome));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_original()).add_attribute(Attribute::Bold),
        count_cell(report.total_removed(), Color::Red).add_attribute(Attribute::Bold),
        Cell::new(report.total_remaining()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn outcome_row(outcome: &ColumnOutcome) -> Vec<Cell> {
    vec![
        Cell::new(&outcome.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.original),
        count_cell(outcome.removed, Color::Red),
        Cell::new(outcome.remaining),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SweepReport {
        SweepReport {
            rows: 3,
            columns: 2,
            reference_codes: 2,
            outcomes: vec![ColumnOutcome::new("SKIN_CARE_GAL_GOLD", 3, 1)],
            skipped: vec![],
        }
    }

    #[test]
    fn column_table_has_total_row() {
        let table = column_table(&report());
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("SKIN_CARE_GAL_GOLD"));
        assert!(rendered.contains("TOTAL"));
    }

    #[test]
    fn file_info_lists_reference_codes() {
        let rendered = file_info_table(&report()).to_string();
        assert!(rendered.contains("Unique outlet codes"));
    }
}
