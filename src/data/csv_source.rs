// ============================================================
// Layer 4 - CSV Identifier Reader
// ============================================================
// Reads the "id" column of a headed, comma-separated file:
//
//   id,label
//   0,positive
//   7,negative
//
// Fields and headers are trimmed. The column may sit anywhere
// in the header row. Ragged rows are rejected by the csv
// reader and surface as Parse errors.

use std::path::PathBuf;

use anyhow::Result;
use csv::{ReaderBuilder, Trim};

use crate::data::{open_input, ID_FIELD};
use crate::domain::error::DiagnosticsError;
use crate::domain::identifier::Identifier;
use crate::domain::traits::IdentifierSource;

pub struct CsvIdSource {
    path:   PathBuf,
    column: String,
}

impl CsvIdSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), column: ID_FIELD.to_string() }
    }
}

impl IdentifierSource for CsvIdSource {
    fn load_ids(&self) -> Result<Vec<Identifier>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(open_input(&self.path)?);

        let headers = reader
            .headers()
            .map_err(|e| DiagnosticsError::parse(&self.path, e.to_string()))?
            .clone();

        let column = headers
            .iter()
            .position(|h| h == self.column)
            .ok_or_else(|| {
                DiagnosticsError::parse(&self.path, format!("missing column '{}'", self.column))
            })?;

        let mut ids = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                DiagnosticsError::parse(&self.path, format!("record {}: {e}", idx + 1))
            })?;

            let value = record.get(column).ok_or_else(|| {
                DiagnosticsError::parse(&self.path, format!("record {}: no '{}' value", idx + 1, self.column))
            })?;

            ids.push(Identifier::from_csv_field(value));
        }

        tracing::debug!("Read {} ids from '{}'", ids.len(), self.path.display());
        Ok(ids)
    }
}
