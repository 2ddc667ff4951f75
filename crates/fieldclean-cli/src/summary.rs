use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fieldclean_model::{CleanReport, FieldSummary};

pub fn print_summary(report: &CleanReport) {
    println!("Input: {}", report.input);
    match &report.output {
        Some(path) => println!("Output: {path}"),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Rows: {}", report.rows);
    println!("{}", summary_table(report));
    if !report.skipped.is_empty() {
        eprintln!("Columns not found (skipped):");
        for column in &report.skipped {
            eprintln!("- {column}");
        }
    }
}

pub fn summary_table(report: &CleanReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Values"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for field in &report.fields {
        table.add_row(field_row(field));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.fields.iter().map(|f| f.total).sum::<usize>())
            .add_attribute(Attribute::Bold),
        count_cell(report.valid_count(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(report.invalid_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(
            report.fields.iter().map(|f| f.missing).sum::<usize>(),
            Color::Yellow,
        )
        .add_attribute(Attribute::Bold),
    ]);
    table
}

fn field_row(field: &FieldSummary) -> Vec<Cell> {
    let column = if field.label == field.column {
        field.column.clone()
    } else {
        format!("{} -> {}", field.column, field.label)
    };
    let kind = field
        .kind
        .map_or_else(|| "-".to_string(), |kind| kind.to_string());
    vec![
        Cell::new(column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(kind),
        Cell::new(field.total),
        count_cell(field.valid, Color::Green),
        count_cell(field.invalid, Color::Red),
        count_cell(field.missing, Color::Yellow),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
