// ============================================================
// Layer 4 - JSONL Identifier Reader
// ============================================================
// Reads a line-delimited JSON file where every non-blank line
// is an object carrying an "id" field:
//
//   {"id": 0, "text": "..."}
//   {"id": 1, "text": "..."}
//
// Any bad line fails the whole read with a Parse error that
// names the 1-based line number. Lines are handed to serde_json
// as raw bytes, so invalid UTF-8 is a Parse error too. Blank
// lines are skipped so a trailing newline is harmless.

use std::{
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::data::{open_input, ID_FIELD};
use crate::domain::error::DiagnosticsError;
use crate::domain::identifier::Identifier;
use crate::domain::traits::IdentifierSource;

pub struct JsonlIdSource {
    path:  PathBuf,
    field: String,
}

impl JsonlIdSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), field: ID_FIELD.to_string() }
    }

    fn parse_error(&self, line_no: usize, detail: impl std::fmt::Display) -> DiagnosticsError {
        DiagnosticsError::parse(&self.path, format!("line {line_no}: {detail}"))
    }
}

impl IdentifierSource for JsonlIdSource {
    fn load_ids(&self) -> Result<Vec<Identifier>> {
        let reader  = BufReader::new(open_input(&self.path)?);
        let mut ids = Vec::new();

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let line    = line
                .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let row: Value = serde_json::from_slice(&line)
                .map_err(|e| self.parse_error(line_no, e))?;

            let raw = row
                .get(self.field.as_str())
                .ok_or_else(|| self.parse_error(line_no, format!("missing field '{}'", self.field)))?;

            let id = Identifier::from_json(raw)
                .ok_or_else(|| self.parse_error(line_no, format!("'{}' is not a scalar: {raw}", self.field)))?;

            ids.push(id);
        }

        tracing::debug!("Read {} ids from '{}'", ids.len(), self.path.display());
        Ok(ids)
    }
}
