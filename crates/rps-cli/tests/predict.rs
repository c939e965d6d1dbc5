//! End-to-end predict command tests over temp files.

use std::path::PathBuf;

use rps_cli::cli::PredictArgs;
use rps_cli::commands::run_predict;
use rps_model::RiskBand;
use tempfile::TempDir;

const COHORT: &str = "\
Patient_ID,age,Tumor_Stage
P-1,-4,Stage I
P-2,0,Stage II
P-3,5,Stage IV
";

fn predict_args(input: PathBuf, output: PathBuf) -> PredictArgs {
    PredictArgs {
        input,
        bundle: None,
        output: Some(output),
        timepoints: vec![365.0, 1825.0],
        horizon: None,
        dry_run: false,
    }
}

#[test]
fn predict_exports_a_result_per_row() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cohort.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, COHORT).unwrap();

    let outcome = run_predict(&predict_args(input, output.clone())).unwrap();

    assert_eq!(outcome.id_column.as_deref(), Some("Patient_ID"));
    assert_eq!(outcome.results.len(), 3);
    assert_eq!(outcome.results[0].id, "P-1");
    // No bundle, so no reference: every band degrades to none.
    assert!(outcome.results.iter().all(|r| r.classification.band.is_none()));
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));

    let exported = std::fs::read_to_string(&output).unwrap();
    let header = exported.lines().next().unwrap();
    assert_eq!(header, "id,risk_score,risk_band,surv_365,surv_1825");
    assert_eq!(exported.lines().count(), 4);
}

#[test]
fn bundle_reference_classifies_bands() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cohort.csv");
    let output = dir.path().join("out.csv");
    let bundle = dir.path().join("bundle.json");
    std::fs::write(&input, COHORT).unwrap();
    std::fs::write(
        &bundle,
        r#"{
            "name": "demo",
            "features": ["age", "Tumor_Stage"],
            "risk_reference": {"q33": 0.4, "q66": 0.7}
        }"#,
    )
    .unwrap();

    let mut args = predict_args(input, output);
    args.bundle = Some(bundle);
    let outcome = run_predict(&args).unwrap();

    assert_eq!(outcome.bundle_name, "demo");
    assert_eq!(
        outcome.results[0].classification.band,
        Some(RiskBand::Low)
    );
    assert_eq!(
        outcome.results[2].classification.band,
        Some(RiskBand::High)
    );
}

#[test]
fn empty_cohort_is_rejected_with_a_message() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cohort.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, "Patient_ID,age\n").unwrap();

    let error = run_predict(&predict_args(input, output)).unwrap_err();
    assert!(format!("{error:#}").contains("no rows"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cohort.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, COHORT).unwrap();

    let mut args = predict_args(input, output.clone());
    args.dry_run = true;
    let outcome = run_predict(&args).unwrap();

    assert!(outcome.output.is_none());
    assert!(!output.exists());
    assert_eq!(outcome.results.len(), 3);
}

#[test]
fn horizon_override_shortens_the_curve() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cohort.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, COHORT).unwrap();

    let mut args = predict_args(input, output);
    args.horizon = Some(90.0);
    args.dry_run = true;
    let outcome = run_predict(&args).unwrap();

    let last = outcome.results[0].curve.points.last().unwrap();
    assert!(last.time <= 90.0);
}
