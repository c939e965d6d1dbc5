pub mod columns;
pub mod delimited;
pub mod error;
pub mod profile;
pub mod source;
pub mod spreadsheet;

pub use columns::{ID_COLUMN_CANDIDATES, detect_id_column};
pub use delimited::{coerce_field, normalize_header, parse_csv_line, parse_delimited};
pub use error::{IngestError, Result};
pub use profile::{ColumnProfile, column_profiles};
pub use source::{ACCEPTED_SUFFIXES, SourceInfo, TableFormat, detect_format, read_table, sha256_hex};
pub use spreadsheet::parse_spreadsheet;
