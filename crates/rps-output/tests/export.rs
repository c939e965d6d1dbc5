//! Export behavior and the export/parse round-trip.

use proptest::prelude::*;

use rps_ingest::parse_delimited;
use rps_model::{
    Dataset, PredictionResult, Record, RiskClassification, SurvivalCurve, SurvivalPoint, Value,
    classify_risk, RiskReference,
};
use rps_output::{export_csv, results_to_dataset, suggested_filename, write_csv};
use tempfile::TempDir;

fn dataset(rows: &[(&str, Option<f64>, &str)]) -> Dataset {
    let mut dataset = Dataset::new(vec![
        "id".to_string(),
        "score".to_string(),
        "note".to_string(),
    ]);
    for (id, score, note) in rows {
        let mut record = Record::new();
        record.insert("id", Value::Text((*id).to_string()));
        record.insert(
            "score",
            score.map(Value::Number).unwrap_or(Value::Missing),
        );
        record.insert(
            "note",
            if note.is_empty() {
                Value::Missing
            } else {
                Value::Text((*note).to_string())
            },
        );
        dataset.push_row(record);
    }
    dataset
}

#[test]
fn empty_dataset_exports_nothing() {
    let empty = Dataset::new(vec!["id".to_string()]);
    assert_eq!(export_csv(&empty).unwrap(), None);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    assert!(!write_csv(&empty, &path).unwrap());
    assert!(!path.exists());
}

#[test]
fn values_render_and_delimiters_are_quoted() {
    let data = dataset(&[
        ("P-1", Some(0.5), "fever, persistent"),
        ("P-2", None, ""),
    ]);
    let text = export_csv(&data).unwrap().unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,score,note"));
    assert_eq!(lines.next(), Some("P-1,0.5,\"fever, persistent\""));
    // Missing cells render as empty fields.
    assert_eq!(lines.next(), Some("P-2,,"));
}

#[test]
fn export_then_parse_preserves_the_dataset() {
    let data = dataset(&[
        ("P-1", Some(61.0), "relapse"),
        ("P-2", None, "stable, improving"),
    ]);
    let text = export_csv(&data).unwrap().unwrap();
    let reparsed = parse_delimited(&text);

    assert_eq!(reparsed.columns, data.columns);
    assert_eq!(reparsed.row_count(), data.row_count());
    assert_eq!(reparsed.value(0, "score"), &Value::Number(61.0));
    assert_eq!(reparsed.value(1, "score"), &Value::Missing);
    assert_eq!(
        reparsed.value(1, "note"),
        &Value::Text("stable, improving".to_string())
    );
}

#[test]
fn write_csv_writes_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let data = dataset(&[("P-1", Some(1.0), "ok")]);
    assert!(write_csv(&data, &path).unwrap());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,score,note"));
}

#[test]
fn suggested_filenames_are_dated_csv() {
    let name = suggested_filename("risk_profiles");
    assert!(name.starts_with("risk_profiles_"));
    assert!(name.ends_with(".csv"));
}

#[test]
fn results_flatten_with_one_column_per_timepoint() {
    let reference = RiskReference { q33: 0.4, q66: 0.7 };
    let curve = SurvivalCurve::new(vec![
        SurvivalPoint {
            time: 0.0,
            probability: 1.0,
        },
        SurvivalPoint {
            time: 365.0,
            probability: 0.9,
        },
    ]);
    let results = vec![
        PredictionResult {
            id: "P-1".to_string(),
            risk_score: 0.2,
            classification: classify_risk(0.2, Some(&reference)),
            curve: curve.clone(),
            sampled: vec![
                SurvivalPoint {
                    time: 365.0,
                    probability: 0.9,
                },
                SurvivalPoint {
                    time: 1825.0,
                    probability: 0.9,
                },
            ],
        },
        PredictionResult {
            id: "P-2".to_string(),
            risk_score: 0.9,
            classification: RiskClassification::none(),
            curve,
            sampled: vec![
                SurvivalPoint {
                    time: 365.0,
                    probability: 0.8,
                },
                SurvivalPoint {
                    time: 1825.0,
                    probability: 0.7,
                },
            ],
        },
    ];

    let flattened = results_to_dataset(&results);
    assert_eq!(
        flattened.columns,
        vec!["id", "risk_score", "risk_band", "surv_365", "surv_1825"]
    );
    assert_eq!(
        flattened.value(0, "risk_band"),
        &Value::Text("Low".to_string())
    );
    // A degraded classification exports as an empty cell, not a label.
    assert_eq!(flattened.value(1, "risk_band"), &Value::Missing);
    assert_eq!(flattened.value(1, "surv_1825"), &Value::Number(0.7));
}

prop_compose! {
    /// Words that can never be mistaken for numbers or missing markers
    /// ("nan", "inf", and friends re-parse as numbers).
    fn word()(
        text in "[a-z]{1,8}".prop_filter("must not parse as a number", |w| {
            w.parse::<f64>().is_err()
        })
    ) -> String {
        text
    }
}

prop_compose! {
    fn row()(id in word(), score in proptest::option::of(-1e6f64..1e6), comma_note in any::<bool>(), note in word(), second in word()) -> (String, Option<f64>, String) {
        let note = if comma_note {
            format!("{note}, {second}")
        } else {
            note
        };
        (id, score, note)
    }
}

proptest! {
    /// Export then re-parse yields the same records, modulo the empty-string
    /// representation of missing values.
    #[test]
    fn roundtrip_property(rows in proptest::collection::vec(row(), 1..20)) {
        let borrowed: Vec<(&str, Option<f64>, &str)> = rows
            .iter()
            .map(|(id, score, note)| (id.as_str(), *score, note.as_str()))
            .collect();
        let data = dataset(&borrowed);
        let text = export_csv(&data).unwrap().expect("non-empty export");
        let reparsed = parse_delimited(&text);

        prop_assert_eq!(&reparsed.columns, &data.columns);
        prop_assert_eq!(reparsed.row_count(), data.row_count());
        for (idx, (_, score, note)) in rows.iter().enumerate() {
            match score {
                Some(number) => prop_assert_eq!(reparsed.value(idx, "score"), &Value::Number(*number)),
                None => prop_assert_eq!(reparsed.value(idx, "score"), &Value::Missing),
            }
            prop_assert_eq!(reparsed.value(idx, "note"), &Value::Text(note.clone()));
        }
    }
}
