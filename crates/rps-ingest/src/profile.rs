//! Per-column statistics over a parsed dataset, used by the inspect command
//! and by default feature selection.

use std::collections::BTreeSet;

use rps_model::{Dataset, Value};

#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    /// Every non-null cell in the column is numeric.
    pub is_numeric: bool,
    pub non_null: usize,
    pub unique_ratio: f64,
    pub null_ratio: f64,
}

pub fn column_profiles(dataset: &Dataset) -> Vec<ColumnProfile> {
    let row_count = dataset.row_count();
    let mut profiles = Vec::with_capacity(dataset.columns.len());
    for column in &dataset.columns {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &dataset.rows {
            match row.get(column) {
                Value::Missing => continue,
                Value::Number(number) => {
                    non_null += 1;
                    numeric += 1;
                    uniques.insert(format!("{number}"));
                }
                Value::Text(text) => {
                    non_null += 1;
                    uniques.insert(text.clone());
                }
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count - non_null) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        profiles.push(ColumnProfile {
            name: column.clone(),
            is_numeric: non_null > 0 && numeric == non_null,
            non_null,
            unique_ratio,
            null_ratio,
        });
    }
    profiles
}
