use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::ParseRunResult;

pub fn print_summary(result: &ParseRunResult) {
    for file in &result.files {
        if let Some(path) = &file.report_path {
            println!("Report: {}", path.display());
        }
        if let Some(path) = &file.rejects_path {
            println!("Rejects: {}", path.display());
        }
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Advisories"),
        header_cell("Unmapped columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_rows = 0usize;
    let mut total_valid = 0usize;
    let mut total_invalid = 0usize;
    let mut total_advisories = 0usize;
    for file in &result.files {
        total_rows += file.batch.row_count();
        total_valid += file.batch.valid_count();
        total_invalid += file.batch.invalid_count();
        total_advisories += file.batch.advisories.len();
        table.add_row(vec![
            file_cell(&file.source),
            Cell::new(file.batch.row_count()),
            count_cell(file.batch.valid_count(), Color::Green),
            count_cell(file.batch.invalid_count(), Color::Red),
            count_cell(file.batch.advisories.len(), Color::Yellow),
            unmapped_cell(&file.batch.unmapped_columns),
        ]);
    }
    if result.files.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(total_rows).add_attribute(Attribute::Bold),
            count_cell(total_valid, Color::Green).add_attribute(Attribute::Bold),
            count_cell(total_invalid, Color::Red).add_attribute(Attribute::Bold),
            count_cell(total_advisories, Color::Yellow).add_attribute(Attribute::Bold),
            dim_cell("-"),
        ]);
    }
    println!("{table}");
    print_issue_table(result);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_issue_table(result: &ParseRunResult) {
    let issues = collect_issues(result);
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Severity"),
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.file),
            severity_cell(issue.severity),
            Cell::new(issue.row + 1),
            field_cell(&issue.field),
            Cell::new(issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Advisory,
    Error,
}

#[derive(Debug)]
struct IssueRow {
    file: String,
    severity: Severity,
    row: usize,
    field: String,
    message: String,
}

fn collect_issues(result: &ParseRunResult) -> Vec<IssueRow> {
    let mut issues = Vec::new();
    for file in &result.files {
        let label = file_label(&file.source);
        for invalid in &file.batch.invalid_rows {
            for error in &invalid.errors {
                issues.push(IssueRow {
                    file: label.clone(),
                    severity: Severity::Error,
                    row: invalid.row_index,
                    field: "-".to_string(),
                    message: error.clone(),
                });
            }
        }
        for advisory in &file.batch.advisories {
            issues.push(IssueRow {
                file: label.clone(),
                severity: Severity::Advisory,
                row: advisory.row_index,
                field: advisory.field.clone(),
                message: advisory.message.clone(),
            });
        }
    }
    issues.sort_by(|a, b| {
        severity_rank(b.severity)
            .cmp(&severity_rank(a.severity))
            .then_with(|| a.file.cmp(&b.file))
            .then_with(|| a.row.cmp(&b.row))
            .then_with(|| a.field.cmp(&b.field))
    });
    issues
}

pub fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("input")
        .to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Advisory => 1,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Advisory => Cell::new("ADVISORY").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn file_cell(path: &Path) -> Cell {
    Cell::new(file_label(path))
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: &str) -> Cell {
    if field == "-" {
        dim_cell(field)
    } else {
        Cell::new(field)
    }
}

fn unmapped_cell(columns: &[String]) -> Cell {
    if columns.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(columns.join(", ")).fg(Color::Yellow)
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
