// ============================================================
// Layer 3 - Error Taxonomy
// ============================================================
// Nothing here is recovered from. Every variant ends the
// process; the enum only exists so callers and tests can tell
// the failure classes apart after downcasting an anyhow::Error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// A required input file does not exist
    #[error("file not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed JSON / JSONL / CSV, or a missing "id" field
    #[error("cannot parse '{}': {detail}", .path.display())]
    Parse { path: PathBuf, detail: String },

    /// No training procedure was wired in but one was needed
    #[error("no training procedure is available (use --trainer, or keep a complete checkpoint in the save directory)")]
    TrainerUnavailable,
}

impl DiagnosticsError {
    pub fn parse(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Parse { path: path.into(), detail: detail.into() }
    }
}
