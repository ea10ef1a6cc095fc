//! Text rendering of datasets and reports.

use crate::simulate::Draw;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Row, Table};
use freqdist::{Report, SummaryStats};

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Formats a statistic the way the dataset shows it, integral values without
/// a fraction.
pub fn number(value: f64) -> String {
    sheetload::Cell::Number(value).to_string()
}

/// Upper-cases the first letter of a region key for headings.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The raw dataset with its original headers.
pub fn dataset(data: &sheetload::Table) -> Table {
    let mut table = table();
    table.set_header(data.headers());

    for row in data.rows() {
        let mut cells = Row::new();
        for cell in row {
            cells.add_cell(match cell {
                sheetload::Cell::Number(_) => right(cell),
                _ => Cell::new(cell.to_string()),
            });
        }
        table.add_row(cells);
    }

    table
}

/// The frequency distribution table.
pub fn frequency(report: &Report) -> Table {
    let mut table = table();
    table.set_header(vec![
        "No",
        "Interval",
        "Frequency",
        "Probability",
        "Cumulative",
        "Random Interval",
    ]);

    for row in report {
        table.add_row(vec![
            right(row.number()),
            Cell::new(row.bin().to_string()),
            right(row.frequency()),
            right(row.probability()),
            right(row.cumulative()),
            Cell::new(row.interval().to_string()),
        ]);
    }

    table
}

/// The statistics the binning was derived from, one per line.
pub fn summary(stats: &SummaryStats) -> String {
    let mut lines = vec![
        format!("Sample size (n): {}", stats.n()),
        format!("x_min: {}", number(stats.min())),
        format!("x_max: {}", number(stats.max())),
        format!("Range (R): {}", number(stats.range())),
        format!("Classes (k): {}", stats.classes()),
        format!("Class width (h): {}", stats.width()),
    ];
    if stats.width_clamped() {
        lines.push("All observations are equal, the class width was raised to 1.".to_string());
    }
    lines.join("\n")
}

/// Every draw with the interval it landed in.
pub fn draws(draws: &[Draw<'_>]) -> Table {
    let mut table = table();
    table.set_header(vec!["Draw", "Random Number", "Interval"]);

    for (i, draw) in draws.iter().enumerate() {
        table.add_row(vec![
            right(i + 1),
            right(draw.number),
            Cell::new(draw.row.bin().to_string()),
        ]);
    }

    table
}

/// How often each row was drawn next to its expected share.
pub fn tally(report: &Report, counts: &[u64]) -> Table {
    let total: u64 = counts.iter().sum();

    let mut table = table();
    table.set_header(vec!["Interval", "Probability", "Draws", "Share"]);

    for (row, count) in report.rows().iter().zip(counts) {
        let share = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64
        };
        table.add_row(vec![
            Cell::new(row.bin().to_string()),
            right(row.probability()),
            right(count),
            right(format!("{share:.2}")),
        ]);
    }

    table
}
