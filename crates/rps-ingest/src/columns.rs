//! Identifier-column detection.

/// Row-identifier candidates, checked in priority order. Matching is
/// case-sensitive and exact; no fuzzy matching.
pub const ID_COLUMN_CANDIDATES: [&str; 6] =
    ["Sample", "Patient_ID", "patient_id", "PatientID", "id", "ID"];

/// First candidate present among the dataset's columns, if any.
pub fn detect_id_column(columns: &[String]) -> Option<&'static str> {
    ID_COLUMN_CANDIDATES
        .iter()
        .find(|candidate| columns.iter().any(|column| column == *candidate))
        .copied()
}
