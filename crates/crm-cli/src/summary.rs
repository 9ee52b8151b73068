use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crm_cli::types::{ExportResult, ImportResult};
use crm_model::{ParseError, RowIssue};

/// Maximum issues listed per table; the rest are counted.
const ISSUE_LIMIT: usize = 20;

pub fn print_import_summary(result: &ImportResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Columns"), Cell::new(result.headers.len())]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(result.parsed_rows)]);
    table.add_row(vec![
        Cell::new("Schema errors"),
        count_cell(result.schema_errors.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Valid rows"),
        Cell::new(result.valid_rows).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid rows"),
        count_cell(result.invalid_rows(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Rule issues"),
        count_cell(result.issues.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Records out").add_attribute(Attribute::Bold),
        Cell::new(result.records.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.unmapped.is_empty() {
        println!("Unmapped columns: {}", result.unmapped.join(", "));
    }
    if !result.missing.is_empty() {
        println!("Missing mapped columns: {}", result.missing.join(", "));
    }

    print_schema_errors(&result.schema_errors);
    print_rule_issues(&result.issues);
}

pub fn print_export_summary(result: &ExportResult) {
    if let Some(path) = &result.output {
        println!(
            "Exported {} rows x {} columns to {}",
            result.rows,
            result.columns,
            path.display()
        );
    }
}

fn print_schema_errors(errors: &[ParseError]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("Schema errors:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors.iter().take(ISSUE_LIMIT) {
        table.add_row(vec![
            Cell::new(error.row),
            Cell::new(&error.column),
            Cell::new(&error.message).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
    print_overflow(errors.len());
}

fn print_rule_issues(issues: &[RowIssue]) {
    if issues.is_empty() {
        return;
    }
    println!();
    println!("Rule issues:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues.iter().take(ISSUE_LIMIT) {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.field),
            Cell::new(&issue.error).fg(Color::Red),
        ]);
    }
    println!("{table}");
    print_overflow(issues.len());
}

fn print_overflow(total: usize) {
    if total > ISSUE_LIMIT {
        println!("... and {} more", total - ISSUE_LIMIT);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}
