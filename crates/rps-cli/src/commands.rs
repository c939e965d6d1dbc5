use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use indicatif::ProgressBar;
use tracing::{debug, info, info_span};

use rps_ingest::{ColumnProfile, column_profiles, detect_id_column, read_table};
use rps_output::{results_to_dataset, suggested_filename, write_csv};
use rps_predict::{MockSurvivalModel, ModelBundle, SurvivalModel, load_bundle, run_predictions};

use crate::cli::{InspectArgs, PredictArgs};
use crate::logging::redact_value;
use crate::summary::{apply_table_style, header_cell, marker_cell};
use crate::types::PredictOutcome;

pub fn run_predict(args: &PredictArgs) -> Result<PredictOutcome> {
    let span = info_span!("predict", input = %args.input.display());
    let _guard = span.enter();

    let (dataset, source) = read_table(&args.input)?;
    let profiles = column_profiles(&dataset);
    let id_column = detect_id_column(&dataset.columns).map(str::to_string);
    info!(id_column = ?id_column, "identifier detection");

    let bundle = match &args.bundle {
        Some(path) => load_bundle(path)?,
        None => default_bundle(&profiles, id_column.as_deref()),
    };
    let mut decay = bundle.decay.unwrap_or_default();
    if let Some(horizon) = args.horizon {
        decay.horizon = horizon;
    }
    let model = MockSurvivalModel::new(decay);

    // The model invocation is a single await-once operation over the whole
    // cohort, so a spinner stands in for per-row progress.
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("running predictions");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let run = run_predictions(
        &dataset,
        id_column.as_deref(),
        &bundle,
        &model,
        &args.timepoints,
    );
    spinner.finish_and_clear();
    let results = run.context("run predictions")?;

    if let Some(first) = results.first() {
        debug!(subject = %redact_value(&first.id), "first scored subject");
    }

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        let exported = write_csv(&results_to_dataset(&results), &path).context("write export")?;
        exported.then_some(path)
    };

    Ok(PredictOutcome {
        source,
        id_column,
        bundle_name: bundle.name.clone().unwrap_or_else(|| "default".to_string()),
        model_name: model.name().to_string(),
        timepoints: args.timepoints.clone(),
        results,
        output,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let (dataset, source) = read_table(&args.input)?;
    let id_column = detect_id_column(&dataset.columns);

    println!("File: {} ({})", source.filename, source.format);
    println!("Rows: {}  Columns: {}", source.rows, source.columns);
    println!("sha256: {}", source.sha256);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-null"),
        header_cell("Unique"),
        header_cell("Null"),
        header_cell("Id"),
    ]);
    apply_table_style(&mut table);
    for profile in column_profiles(&dataset) {
        let is_id = Some(profile.name.as_str()) == id_column;
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(if profile.is_numeric { "numeric" } else { "text" }),
            Cell::new(profile.non_null),
            Cell::new(format!("{:.0}%", profile.unique_ratio * 100.0)),
            Cell::new(format!("{:.0}%", profile.null_ratio * 100.0)),
            marker_cell(is_id),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(suggested_filename("risk_profiles"))
}

/// When no bundle is supplied, every fully-numeric column except the
/// identifier becomes a feature and no risk reference is available, so
/// bands stay unclassified.
fn default_bundle(profiles: &[ColumnProfile], id_column: Option<&str>) -> ModelBundle {
    let features: Vec<String> = profiles
        .iter()
        .filter(|profile| profile.is_numeric)
        .filter(|profile| Some(profile.name.as_str()) != id_column)
        .map(|profile| profile.name.clone())
        .collect();
    info!(features = features.len(), "derived default bundle");
    ModelBundle {
        name: Some("default".to_string()),
        features,
        risk_reference: None,
        decay: None,
    }
}
