// ============================================================
// Layer 3 - Metric Curves
// ============================================================
// A training run yields four curves:
//
//   training_loss        flat sequence of scalar losses
//   training_accuracy    sequence of (x, accuracy) pairs
//   validation_loss      flat sequence of scalar losses
//   validation_accuracy  sequence of (x, accuracy) pairs
//
// Accuracy pairs serialise as two-element JSON arrays, e.g.
//   [[1.0, 0.42], [2.0, 0.57]]
//
// Curves are produced once per run and not modified afterwards.

use serde::{Deserialize, Serialize};

/// One loss value per step or epoch
pub type LossCurve = Vec<f64>;

/// (x, accuracy) pairs, x usually the epoch number
pub type AccuracyCurve = Vec<(f64, f64)>;

/// The four curves of one training run, addressable by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricCurves {
    pub training_loss:       LossCurve,
    pub training_accuracy:   AccuracyCurve,
    pub validation_loss:     LossCurve,
    pub validation_accuracy: AccuracyCurve,
}

impl MetricCurves {
    pub fn new(
        training_loss:       LossCurve,
        training_accuracy:   AccuracyCurve,
        validation_loss:     LossCurve,
        validation_accuracy: AccuracyCurve,
    ) -> Self {
        Self { training_loss, training_accuracy, validation_loss, validation_accuracy }
    }

    /// True when every curve is empty
    pub fn is_empty(&self) -> bool {
        self.training_loss.is_empty()
            && self.training_accuracy.is_empty()
            && self.validation_loss.is_empty()
            && self.validation_accuracy.is_empty()
    }

    /// Last recorded validation accuracy, if any
    pub fn final_validation_accuracy(&self) -> Option<f64> {
        self.validation_accuracy.last().map(|&(_, acc)| acc)
    }
}
