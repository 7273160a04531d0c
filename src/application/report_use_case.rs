// ============================================================
// Layer 2 - ReportUseCase
// ============================================================
// Produces the training curve figure. Curves come from exactly
// one of three places, decided before anything is read:
//
//   resume              → trainer, resume mode (told whether
//                         saved artifacts exist)
//   !resume && load     → checkpoint file, trainer untouched
//   otherwise           → create save dir, trainer, fresh mode
//                         (+ persist the run if enabled)
//
// `load` is true only when all five artifacts are on disk.
// On resume the trainer's curves are used as returned; merging
// with earlier history, if wanted, is the trainer's job.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::curves::MetricCurves;
use crate::domain::traits::{TrainRequest, Trainer};
use crate::infra::{chart::render_curves_svg, checkpoint::CheckpointStore};

// ─── Configuration ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory holding the checkpoint and per-curve files
    pub save_dir: String,

    /// Continue a previous run through the trainer
    pub resume:   bool,

    /// Save a fresh run's curves so the next report can load them
    pub persist:  bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            save_dir: "save_data".to_string(),
            resume:   false,
            persist:  false,
        }
    }
}

/// Which branch produced the curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveOrigin {
    Resumed,
    Checkpoint,
    FreshTraining,
}

/// Everything Layer 1 needs to display the result
#[derive(Debug, Clone)]
pub struct CurveReport {
    pub origin: CurveOrigin,
    pub curves: MetricCurves,
    pub svg:    String,
}

// ─── ReportUseCase ───────────────────────────────────────────────────────────
pub struct ReportUseCase<T: Trainer> {
    config:  ReportConfig,
    trainer: T,
    store:   CheckpointStore,
}

impl<T: Trainer> ReportUseCase<T> {
    pub fn new(config: ReportConfig, trainer: T) -> Self {
        let store = CheckpointStore::new(&config.save_dir);
        Self { config, trainer, store }
    }

    /// Pick a branch and obtain the four curves.
    pub fn collect_curves(&mut self) -> Result<(CurveOrigin, MetricCurves)> {
        let resume = self.config.resume;
        let load   = self.store.artifacts_present();
        tracing::info!(resume, load, "Collecting curves from '{}'", self.store.dir().display());

        if resume {
            let curves = self.trainer.train(&TrainRequest { resume: true, load })?;
            return Ok((CurveOrigin::Resumed, curves));
        }

        if load {
            let curves = self.store.load_checkpoint()?.into_curves();
            return Ok((CurveOrigin::Checkpoint, curves));
        }

        self.store.ensure_dir()?;
        let curves = self.trainer.train(&TrainRequest { resume: false, load: false })?;

        if self.config.persist {
            self.store.save(&curves)?;
        } else {
            tracing::debug!("Persistence disabled; fresh curves not written");
        }
        Ok((CurveOrigin::FreshTraining, curves))
    }

    /// Collect the curves and render the 2x2 figure.
    pub fn execute(&mut self) -> Result<CurveReport> {
        let (origin, curves) = self.collect_curves()?;
        if curves.is_empty() {
            tracing::warn!(?origin, "All four curves are empty; rendering blank panels");
        }
        let svg = render_curves_svg(&curves)?;
        tracing::info!(?origin, "Curve figure ready");
        Ok(CurveReport { origin, curves, svg })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DiagnosticsError;
    use crate::infra::checkpoint::{Checkpoint, ARTIFACT_FILES, CHECKPOINT_FILE};
    use crate::ml::trainer::{SyntheticTrainer, UnavailableTrainer};
    use std::{cell::RefCell, fs, path::Path};
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> ReportConfig {
        ReportConfig {
            save_dir: dir.join("save_data").to_string_lossy().into_owned(),
            ..ReportConfig::default()
        }
    }

    fn trained_curves() -> MetricCurves {
        MetricCurves::new(vec![1.0, 0.5], vec![(1.0, 0.4), (2.0, 0.6)], vec![1.2, 0.7], vec![(1.0, 0.3), (2.0, 0.5)])
    }

    fn stored_curves() -> MetricCurves {
        MetricCurves::new(vec![9.0], vec![(1.0, 0.9)], vec![8.0], vec![(1.0, 0.8)])
    }

    /// Write all five artifacts with the checkpoint holding `curves`.
    fn seed_artifacts(save_dir: &Path, curves: &MetricCurves) {
        fs::create_dir_all(save_dir).unwrap();
        for name in ARTIFACT_FILES {
            fs::write(save_dir.join(name), "[]").unwrap();
        }
        let checkpoint = serde_json::to_string(&Checkpoint::from_curves(curves)).unwrap();
        fs::write(save_dir.join(CHECKPOINT_FILE), checkpoint).unwrap();
    }

    #[test]
    fn test_fresh_branch_creates_dir_before_training() {
        let tmp      = TempDir::new().unwrap();
        let config   = config_in(tmp.path());
        let save_dir = Path::new(&config.save_dir).to_path_buf();
        let calls    = RefCell::new(Vec::new());

        let trainer = |req: &TrainRequest| -> Result<MetricCurves> {
            assert!(save_dir.is_dir(), "save dir must exist before training");
            calls.borrow_mut().push(*req);
            Ok(trained_curves())
        };

        let (origin, curves) = ReportUseCase::new(config.clone(), trainer).collect_curves().unwrap();
        assert_eq!(origin, CurveOrigin::FreshTraining);
        assert_eq!(curves, trained_curves());
        assert_eq!(*calls.borrow(), vec![TrainRequest { resume: false, load: false }]);

        // persistence is off by default
        assert!(!CheckpointStore::new(&config.save_dir).artifacts_present());
    }

    #[test]
    fn test_checkpoint_branch_never_trains() {
        let tmp    = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        seed_artifacts(Path::new(&config.save_dir), &stored_curves());

        let trainer = |_: &TrainRequest| -> Result<MetricCurves> {
            panic!("trainer must not run when a checkpoint is loaded")
        };

        let (origin, curves) = ReportUseCase::new(config, trainer).collect_curves().unwrap();
        assert_eq!(origin, CurveOrigin::Checkpoint);
        assert_eq!(curves, stored_curves());
    }

    #[test]
    fn test_resume_trains_even_with_artifacts() {
        let tmp    = TempDir::new().unwrap();
        let config = ReportConfig { resume: true, ..config_in(tmp.path()) };
        seed_artifacts(Path::new(&config.save_dir), &stored_curves());

        let mut seen = None;
        let trainer = |req: &TrainRequest| -> Result<MetricCurves> {
            seen = Some(*req);
            Ok(trained_curves())
        };

        let (origin, curves) = ReportUseCase::new(config, trainer).collect_curves().unwrap();
        assert_eq!(origin, CurveOrigin::Resumed);
        assert_eq!(curves, trained_curves());
        assert_eq!(seen, Some(TrainRequest { resume: true, load: true }));
    }

    #[test]
    fn test_resume_without_artifacts_reports_load_false() {
        let tmp    = TempDir::new().unwrap();
        let config = ReportConfig { resume: true, ..config_in(tmp.path()) };

        let mut seen = None;
        let trainer = |req: &TrainRequest| -> Result<MetricCurves> {
            seen = Some(*req);
            Ok(trained_curves())
        };

        ReportUseCase::new(config, trainer).collect_curves().unwrap();
        assert_eq!(seen, Some(TrainRequest { resume: true, load: false }));
    }

    #[test]
    fn test_partial_artifacts_fall_through_to_training() {
        let tmp    = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let dir    = Path::new(&config.save_dir);
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(CHECKPOINT_FILE), "{}").unwrap();

        let (origin, _) = ReportUseCase::new(config, SyntheticTrainer::new(3, 0)).collect_curves().unwrap();
        assert_eq!(origin, CurveOrigin::FreshTraining);
    }

    #[test]
    fn test_missing_trainer_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = ReportUseCase::new(config_in(tmp.path()), UnavailableTrainer)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiagnosticsError>(),
            Some(DiagnosticsError::TrainerUnavailable)
        ));
    }

    #[test]
    fn test_empty_curves_still_render() {
        let tmp     = TempDir::new().unwrap();
        let trainer = |_: &TrainRequest| -> Result<MetricCurves> { Ok(MetricCurves::default()) };

        let report = ReportUseCase::new(config_in(tmp.path()), trainer).execute().unwrap();
        assert_eq!(report.origin, CurveOrigin::FreshTraining);
        assert!(report.curves.is_empty());
        assert!(report.svg.contains("Training Loss: no data"));
    }

    #[test]
    fn test_persisted_run_is_loaded_next_time() {
        let tmp    = TempDir::new().unwrap();
        let config = ReportConfig { persist: true, ..config_in(tmp.path()) };

        let first = ReportUseCase::new(config.clone(), SyntheticTrainer::new(5, 11)).execute().unwrap();
        assert_eq!(first.origin, CurveOrigin::FreshTraining);

        let second = ReportUseCase::new(config, UnavailableTrainer).execute().unwrap();
        assert_eq!(second.origin, CurveOrigin::Checkpoint);
        assert_eq!(second.curves, first.curves);
        assert!(second.svg.contains("Validation Accuracy"));
    }
}
