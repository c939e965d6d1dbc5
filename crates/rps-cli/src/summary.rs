use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rps_model::{PredictionResult, RiskBand};
use rps_transform::format_numeric;

use crate::types::PredictOutcome;

pub fn print_predict_summary(outcome: &PredictOutcome) {
    println!(
        "Source: {} ({} rows, {} columns)",
        outcome.source.filename, outcome.source.rows, outcome.source.columns
    );
    match &outcome.id_column {
        Some(column) => println!("Identifier: {column}"),
        None => println!("Identifier: <row number>"),
    }
    println!(
        "Bundle: {}  Model: {}",
        outcome.bundle_name, outcome.model_name
    );
    if let Some(path) = &outcome.output {
        println!("Export: {}", path.display());
    }

    let mut table = Table::new();
    let mut header = vec![
        header_cell("Subject"),
        header_cell("Risk score"),
        header_cell("Band"),
    ];
    for timepoint in &outcome.timepoints {
        header.push(header_cell(&format!("S({})", format_numeric(*timepoint))));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for index in 3..3 + outcome.timepoints.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for result in &outcome.results {
        let mut row = vec![
            Cell::new(&result.id),
            Cell::new(format!("{:.4}", result.risk_score)),
            band_cell(result.classification.band),
        ];
        for point in &result.sampled {
            row.push(Cell::new(format!("{:.3}", point.probability)));
        }
        table.add_row(row);
    }
    println!("{table}");

    let (low, intermediate, high, unclassified) = band_counts(&outcome.results);
    println!("Bands: {low} low, {intermediate} intermediate, {high} high, {unclassified} unclassified");
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

pub fn marker_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn band_cell(band: Option<RiskBand>) -> Cell {
    match band {
        Some(RiskBand::Low) => Cell::new("Low").fg(Color::Green),
        Some(RiskBand::Intermediate) => Cell::new("Intermediate").fg(Color::Yellow),
        Some(RiskBand::High) => Cell::new("High")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn band_counts(results: &[PredictionResult]) -> (usize, usize, usize, usize) {
    let mut counts = (0usize, 0usize, 0usize, 0usize);
    for result in results {
        match result.classification.band {
            Some(RiskBand::Low) => counts.0 += 1,
            Some(RiskBand::Intermediate) => counts.1 += 1,
            Some(RiskBand::High) => counts.2 += 1,
            None => counts.3 += 1,
        }
    }
    counts
}
