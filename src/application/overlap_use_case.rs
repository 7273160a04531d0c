// ============================================================
// Layer 2 - OverlapUseCase
// ============================================================
// Answers "how many test ids made it into the prediction file":
//
//   Step 1: Read ids from the test set      (JsonlIdSource)
//   Step 2: Read ids from the predictions   (CsvIdSource)
//   Step 3: Count per-occurrence overlap    (count_overlap)
//
// Pure function of the two files: unchanged inputs always give
// the same report.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{csv_source::CsvIdSource, jsonl_source::JsonlIdSource, overlap::count_overlap};
use crate::domain::traits::IdentifierSource;

// ─── Configuration ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapConfig {
    pub dataset_dir:     String,
    pub test_file:       String,
    pub prediction_file: String,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            dataset_dir:     "./dataset".to_string(),
            test_file:       "test.jsonl".to_string(),
            prediction_file: "sample_prediction.csv".to_string(),
        }
    }
}

impl OverlapConfig {
    pub fn test_path(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join(&self.test_file)
    }

    pub fn prediction_path(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join(&self.prediction_file)
    }
}

// ─── Result ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapReport {
    /// Number of ids in the test set, duplicates included
    pub total:   usize,

    /// How many of those also appear in the predictions
    pub overlap: usize,
}

// ─── OverlapUseCase ──────────────────────────────────────────────────────────
pub struct OverlapUseCase {
    config: OverlapConfig,
}

impl OverlapUseCase {
    pub fn new(config: OverlapConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<OverlapReport> {
        let tests       = JsonlIdSource::new(self.config.test_path());
        let predictions = CsvIdSource::new(self.config.prediction_path());
        compare(&tests, &predictions)
    }
}

/// Overlap of any two identifier sources.
pub fn compare(first: &dyn IdentifierSource, second: &dyn IdentifierSource) -> Result<OverlapReport> {
    let first_ids  = first.load_ids()?;
    let second_ids = second.load_ids()?;

    let report = OverlapReport {
        total:   first_ids.len(),
        overlap: count_overlap(&first_ids, &second_ids),
    };

    tracing::info!(
        "{} of {} ids found among {} reference ids",
        report.overlap,
        report.total,
        second_ids.len(),
    );
    Ok(report)
}
