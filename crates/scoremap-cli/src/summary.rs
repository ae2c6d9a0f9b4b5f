use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scoremap_cli::types::{AssignRun, SubjectRules};
use scoremap_model::format_numeric;

pub fn print_summary(run: &AssignRun) {
    println!("Scores: {}", run.scores.display());
    println!("Rules: {}", run.rules.display());
    match &run.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    println!("Layout: {}", run.options.layout);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Rules"),
        header_cell("Assigned"),
        header_cell("Blank"),
        header_cell("Unparsed"),
        header_cell("Below bands"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    let mut totals = [0usize; 4];
    for stats in &run.subjects {
        totals[0] += stats.assigned;
        totals[1] += stats.blank;
        totals[2] += stats.unparsed;
        totals[3] += stats.unmatched;
        table.add_row(vec![
            Cell::new(&stats.subject),
            Cell::new(stats.rule_count),
            Cell::new(stats.assigned),
            count_cell(stats.blank, Color::Reset),
            count_cell(stats.unparsed, Color::Yellow),
            count_cell(stats.unmatched, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        Cell::new(totals[1]).add_attribute(Attribute::Bold),
        Cell::new(totals[2]).add_attribute(Attribute::Bold),
        Cell::new(totals[3]).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Rows: {} ({} with a total)", run.rows, run.rows_with_total);
    if !run.skipped_subjects.is_empty() {
        eprintln!("Subjects not in score table:");
        for subject in &run.skipped_subjects {
            eprintln!("- {subject}");
        }
    }
}

pub fn print_subjects(subjects: &[SubjectRules]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Rules"),
        header_cell("Lowest"),
        header_cell("Highest"),
        header_cell("Duplicates"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for subject in subjects {
        let duplicates = if subject.duplicate_thresholds.is_empty() {
            dim_cell("-")
        } else {
            let listed: Vec<String> = subject
                .duplicate_thresholds
                .iter()
                .map(|value| format_numeric(*value))
                .collect();
            Cell::new(listed.join(", ")).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(&subject.subject),
            Cell::new(subject.rule_count),
            threshold_cell(subject.lowest_threshold),
            threshold_cell(subject.highest_threshold),
            duplicates,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell("0")
    } else {
        Cell::new(count).fg(color)
    }
}

fn threshold_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)),
        None => dim_cell("-"),
    }
}
