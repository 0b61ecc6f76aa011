//! Operator-facing end-of-run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::PipelineReport;

pub fn print_report(report: &PipelineReport) {
    println!("Run: {}", report.run_id);
    println!("Artifacts: {}", report.run_root.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Result"),
        header_cell("Artifact"),
    ]);
    table.add_row(vec![
        Cell::new("Validation"),
        Cell::new(format!(
            "{} valid / {} invalid",
            report.valid_count, report.invalid_count
        )),
        Cell::new("data_validation/"),
    ]);
    table.add_row(vec![
        Cell::new("Transformation"),
        Cell::new(format!(
            "{} train / {} test rows",
            report.train_rows, report.test_rows
        )),
        Cell::new(report.preprocessor_path.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Training").add_attribute(Attribute::Bold),
        Cell::new(format!("score {:.3}", report.model_score))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Left),
        Cell::new(report.model_path.display().to_string()),
    ]);
    println!("{table}");
    println!(
        "training completed. Trained model score: {:.3}",
        report.model_score
    );
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}
