// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer only sees these traits:
//
//   IdentifierSource - anything that yields the "id" column
//                      (JsonlIdSource, CsvIdSource)
//   Trainer          - the training procedure the curve report
//                      falls back to when there is no checkpoint
//                      (UnavailableTrainer, SyntheticTrainer, or
//                      any closure with the right signature)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::curves::MetricCurves;
use crate::domain::identifier::Identifier;

// ─── IdentifierSource ─────────────────────────────────────────────────────────
/// Any component that can produce an ordered list of identifiers.
pub trait IdentifierSource {
    /// Read every identifier, in source order, duplicates kept.
    fn load_ids(&self) -> Result<Vec<Identifier>>;
}

// ─── Trainer ──────────────────────────────────────────────────────────────────
/// What the reporter asks of a training procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainRequest {
    /// Continue a previous run instead of starting fresh
    pub resume: bool,

    /// All saved artifacts were found on disk
    pub load: bool,
}

/// A training procedure returning the four curves of its run.
///
/// Model, optimizer and data loaders are owned by the
/// implementation; the reporter never sees them.
pub trait Trainer {
    fn train(&mut self, request: &TrainRequest) -> Result<MetricCurves>;
}

impl<F> Trainer for F
where
    F: FnMut(&TrainRequest) -> Result<MetricCurves>,
{
    fn train(&mut self, request: &TrainRequest) -> Result<MetricCurves> {
        self(request)
    }
}
