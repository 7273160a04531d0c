// ============================================================
// Layer 4 - Data Readers
// ============================================================
// Everything that turns files on disk into identifier lists,
// plus the overlap count itself:
//
//   test.jsonl             sample_prediction.csv
//       │                        │
//       ▼                        ▼
//   JsonlIdSource            CsvIdSource
//       │                        │
//       └──────► count_overlap ◄─┘
//
// Both readers implement domain::traits::IdentifierSource.
// File handles live only for the duration of one load_ids().
//
// Reference: Rust Book §9 (Error Handling), §13 (Iterators)

use std::{fs::File, path::Path};

use anyhow::{Context, Result};

use crate::domain::error::DiagnosticsError;

/// Line-delimited JSON reader for the "id" field
pub mod jsonl_source;

/// Comma-separated reader for the "id" column
pub mod csv_source;

/// Per-occurrence membership count
pub mod overlap;

/// Name of the identifier column in both inputs
pub const ID_FIELD: &str = "id";

/// Open an input file, reporting a missing file as FileNotFound
/// rather than a bare io::Error.
pub(crate) fn open_input(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(DiagnosticsError::FileNotFound { path: path.to_path_buf() }.into());
    }
    File::open(path).with_context(|| format!("Cannot open '{}'", path.display()))
}
