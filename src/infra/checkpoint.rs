// ============================================================
// Layer 6 - Checkpoint Store
// ============================================================
// Owns the save directory of a training run. A complete run
// leaves five artifacts behind:
//
//   save_data/
//     model_checkpoint.pth       ← checkpoint: all four curves
//                                  plus opaque model state
//     training_loss.json         ← [2.1, 1.4, ...]
//     training_accuracy.json     ← [[1.0, 0.31], [2.0, 0.52], ...]
//     validation_loss.json
//     validation_accuracy.json
//
// The reporter only trusts the directory when all five exist.
// Loading reads the checkpoint alone; the per-curve files are
// written for humans and other tools.
//
// The checkpoint is JSON despite the .pth name:
//   {
//     "training_loss":       [...],
//     "training_accuracy":   [[x, y], ...],
//     "validation_loss":     [...],
//     "validation_accuracy": [[x, y], ...],
//     "model_state":         <any JSON, optional>
//   }
// Unknown extra fields are ignored.
//
// Writes go to "<name>.tmp" first and are renamed into place,
// so a reader never observes a half-written artifact.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::curves::{AccuracyCurve, LossCurve, MetricCurves};
use crate::domain::error::DiagnosticsError;

pub const CHECKPOINT_FILE:          &str = "model_checkpoint.pth";
pub const TRAINING_LOSS_FILE:       &str = "training_loss.json";
pub const TRAINING_ACCURACY_FILE:   &str = "training_accuracy.json";
pub const VALIDATION_LOSS_FILE:     &str = "validation_loss.json";
pub const VALIDATION_ACCURACY_FILE: &str = "validation_accuracy.json";

/// Every file that must exist before the directory counts as loadable
pub const ARTIFACT_FILES: [&str; 5] = [
    CHECKPOINT_FILE,
    TRAINING_LOSS_FILE,
    TRAINING_ACCURACY_FILE,
    VALIDATION_LOSS_FILE,
    VALIDATION_ACCURACY_FILE,
];

// ─── Checkpoint ──────────────────────────────────────────────────────────────
/// On-disk form of the checkpoint artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub training_loss:       LossCurve,
    pub training_accuracy:   AccuracyCurve,
    pub validation_loss:     LossCurve,
    pub validation_accuracy: AccuracyCurve,

    /// Model weights / optimizer state; opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_state: Option<serde_json::Value>,
}

impl Checkpoint {
    pub fn from_curves(curves: &MetricCurves) -> Self {
        Self {
            training_loss:       curves.training_loss.clone(),
            training_accuracy:   curves.training_accuracy.clone(),
            validation_loss:     curves.validation_loss.clone(),
            validation_accuracy: curves.validation_accuracy.clone(),
            model_state:         None,
        }
    }

    /// Pull the four named curves out; model state is dropped.
    pub fn into_curves(self) -> MetricCurves {
        MetricCurves::new(
            self.training_loss,
            self.training_accuracy,
            self.validation_loss,
            self.validation_accuracy,
        )
    }
}

// ─── CheckpointStore ─────────────────────────────────────────────────────────
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    /// Point the store at a directory. Nothing is created here;
    /// see ensure_dir().
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        self.dir.join(CHECKPOINT_FILE)
    }

    /// True only when all five artifacts exist.
    pub fn artifacts_present(&self) -> bool {
        ARTIFACT_FILES.iter().all(|name| self.dir.join(name).exists())
    }

    /// Create the save directory (and parents) if missing.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create save directory '{}'", self.dir.display()))
    }

    /// Read and decode the checkpoint artifact.
    pub fn load_checkpoint(&self) -> Result<Checkpoint> {
        let path = self.checkpoint_path();
        if !path.exists() {
            return Err(DiagnosticsError::FileNotFound { path }.into());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read checkpoint '{}'", path.display()))?;

        let checkpoint: Checkpoint = serde_json::from_str(&json)
            .map_err(|e| DiagnosticsError::parse(&path, e.to_string()))?;

        tracing::info!(
            "Loaded checkpoint '{}' ({} training / {} validation loss points)",
            path.display(),
            checkpoint.training_loss.len(),
            checkpoint.validation_loss.len(),
        );
        Ok(checkpoint)
    }

    /// Persist a run: the checkpoint first, then one file per curve.
    pub fn save(&self, curves: &MetricCurves) -> Result<()> {
        self.ensure_dir()?;

        self.write_json(CHECKPOINT_FILE,          &Checkpoint::from_curves(curves))?;
        self.write_json(TRAINING_LOSS_FILE,       &curves.training_loss)?;
        self.write_json(TRAINING_ACCURACY_FILE,   &curves.training_accuracy)?;
        self.write_json(VALIDATION_LOSS_FILE,     &curves.validation_loss)?;
        self.write_json(VALIDATION_ACCURACY_FILE, &curves.validation_accuracy)?;

        tracing::info!("Saved {} artifacts to '{}'", ARTIFACT_FILES.len(), self.dir.display());
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let tmp  = self.dir.join(format!("{name}.tmp"));

        let json = serde_json::to_string_pretty(value)?;
        let written = fs::write(&tmp, json)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))
            .and_then(|()| {
                fs::rename(&tmp, &path)
                    .with_context(|| format!("Cannot move '{}' into place", path.display()))
            });

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_curves() -> MetricCurves {
        MetricCurves::new(
            vec![2.0, 1.2, 0.8],
            vec![(1.0, 0.3), (2.0, 0.6), (3.0, 0.7)],
            vec![2.2, 1.5, 1.1],
            vec![(1.0, 0.25), (2.0, 0.5), (3.0, 0.6)],
        )
    }

    #[test]
    fn test_empty_dir_has_no_artifacts() {
        let tmp = TempDir::new().unwrap();
        assert!(!CheckpointStore::new(tmp.path().join("save_data")).artifacts_present());
    }

    #[test]
    fn test_partial_artifacts_do_not_count() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path());
        for name in &ARTIFACT_FILES[..4] {
            fs::write(tmp.path().join(name), "[]").unwrap();
        }
        assert!(!store.artifacts_present());
    }

    #[test]
    fn test_save_writes_all_artifacts_and_loads_back() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path().join("nested").join("save_data"));

        store.save(&sample_curves()).unwrap();

        assert!(store.artifacts_present());
        let loaded = store.load_checkpoint().unwrap();
        assert_eq!(loaded.into_curves(), sample_curves());

        // no temporary files left behind
        let leftovers = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_failed_rename_leaves_no_temporary_file() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path());

        // a non-empty directory where the checkpoint should go blocks the rename
        let blocker = store.checkpoint_path();
        fs::create_dir_all(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        assert!(store.save(&sample_curves()).is_err());
        assert!(!tmp.path().join(format!("{CHECKPOINT_FILE}.tmp")).exists());
        assert!(!store.artifacts_present());
    }

    #[test]
    fn test_per_curve_files_hold_one_curve_each() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path());
        store.save(&sample_curves()).unwrap();

        let acc: AccuracyCurve = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(VALIDATION_ACCURACY_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(acc, sample_curves().validation_accuracy);
    }

    #[test]
    fn test_checkpoint_with_model_state_and_extra_fields() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path());
        fs::write(
            store.checkpoint_path(),
            r#"{"training_loss":[1.0],"training_accuracy":[[1,0.5]],
                "validation_loss":[1.5],"validation_accuracy":[[1,0.4]],
                "model_state":{"layers":2},"epoch":1}"#,
        )
        .unwrap();

        let checkpoint = store.load_checkpoint().unwrap();
        assert!(checkpoint.model_state.is_some());
        assert_eq!(checkpoint.training_accuracy, vec![(1.0, 0.5)]);
    }

    #[test]
    fn test_missing_curve_field_is_parse_error() {
        let tmp   = TempDir::new().unwrap();
        let store = CheckpointStore::new(tmp.path());
        fs::write(store.checkpoint_path(), r#"{"training_loss":[1.0]}"#).unwrap();

        let err = store.load_checkpoint().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiagnosticsError>(),
            Some(DiagnosticsError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_checkpoint_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = CheckpointStore::new(tmp.path()).load_checkpoint().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiagnosticsError>(),
            Some(DiagnosticsError::FileNotFound { .. })
        ));
    }
}
