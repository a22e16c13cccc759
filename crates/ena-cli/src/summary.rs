use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ena_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Table: {}", result.table.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run (not written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Samples"),
        header_cell("Skipped"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(result.rows_read),
        Cell::new(result.samples).add_attribute(Attribute::Bold),
        count_cell(result.skipped.len(), Color::Yellow),
        written_cell(result.output.is_some()),
    ]);
    println!("{table}");
    print_skipped_table(result);
}

fn print_skipped_table(result: &ConvertResult) {
    if !result.has_skipped() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Line"), header_cell("Reason")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in &result.skipped {
        table.add_row(vec![Cell::new(row.line), Cell::new(&row.reason)]);
    }
    println!();
    println!("Skipped rows:");
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
