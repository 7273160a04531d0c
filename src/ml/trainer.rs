// ============================================================
// Layer 5 - Built-in Trainers
// ============================================================
// SyntheticTrainer shapes its curves like a healthy run:
//
//   loss(t)     = floor + span * exp(-t / tau) + noise
//   accuracy(t) = ceiling - span * exp(-t / tau) + noise
//
// with validation slightly worse than training. The RNG is
// seeded so the same (epochs, seed) always yields the same
// curves.
//
// Reference: rand crate documentation (StdRng, SeedableRng)

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::curves::MetricCurves;
use crate::domain::error::DiagnosticsError;
use crate::domain::traits::{TrainRequest, Trainer};

/// Decay constant of the synthetic curves, in epochs
const TAU: f64 = 4.0;

/// Amplitude of the uniform noise added to every point
const NOISE: f64 = 0.03;

// ─── UnavailableTrainer ──────────────────────────────────────────────────────
/// Stands in for a training procedure that was never provided.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTrainer;

impl Trainer for UnavailableTrainer {
    fn train(&mut self, request: &TrainRequest) -> Result<MetricCurves> {
        tracing::warn!(resume = request.resume, load = request.load, "Training requested but no trainer is configured");
        Err(DiagnosticsError::TrainerUnavailable.into())
    }
}

// ─── SyntheticTrainer ────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SyntheticTrainer {
    epochs: usize,
    seed:   u64,
}

impl SyntheticTrainer {
    pub fn new(epochs: usize, seed: u64) -> Self {
        Self { epochs, seed }
    }
}

impl Trainer for SyntheticTrainer {
    fn train(&mut self, request: &TrainRequest) -> Result<MetricCurves> {
        if request.resume {
            // Nothing to restore: synthetic runs always replay from epoch 1
            tracing::debug!(load = request.load, "Synthetic trainer ignores resume state");
        }

        let mut rng    = StdRng::seed_from_u64(self.seed);
        let mut curves = MetricCurves::default();

        for epoch in 1..=self.epochs {
            let t     = epoch as f64;
            let decay = (-t / TAU).exp();

            let train_loss = 0.35 + 2.0 * decay + rng.gen_range(-NOISE..NOISE);
            let val_loss   = 0.50 + 1.9 * decay + rng.gen_range(-NOISE..NOISE);
            let train_acc  = 0.95 - 0.85 * decay + rng.gen_range(-NOISE..NOISE);
            let val_acc    = 0.88 - 0.80 * decay + rng.gen_range(-NOISE..NOISE);

            curves.training_loss.push(train_loss.max(0.0));
            curves.validation_loss.push(val_loss.max(0.0));
            curves.training_accuracy.push((t, train_acc.clamp(0.0, 1.0)));
            curves.validation_accuracy.push((t, val_acc.clamp(0.0, 1.0)));
        }

        tracing::info!(
            "Synthetic training finished: {} epochs, final val_acc={:.3}",
            self.epochs,
            curves.final_validation_accuracy().unwrap_or(0.0),
        );
        Ok(curves)
    }
}
