// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Two subcommands, `overlap` and `report`, with every fixed
// path of the original tools exposed as a defaulted flag.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::overlap_use_case::OverlapConfig;
use crate::application::report_use_case::ReportConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count how many test-set ids appear in the prediction file
    Overlap(OverlapArgs),

    /// Load or compute training curves and render the 2x2 figure
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct OverlapArgs {
    /// Directory holding both input files
    #[arg(long, default_value = "./dataset")]
    pub dataset_dir: String,

    /// Line-delimited JSON test set, relative to --dataset-dir
    #[arg(long, default_value = "test.jsonl")]
    pub test_file: String,

    /// CSV prediction file, relative to --dataset-dir
    #[arg(long, default_value = "sample_prediction.csv")]
    pub prediction_file: String,
}

impl From<OverlapArgs> for OverlapConfig {
    fn from(a: OverlapArgs) -> Self {
        OverlapConfig {
            dataset_dir:     a.dataset_dir,
            test_file:       a.test_file,
            prediction_file: a.prediction_file,
        }
    }
}

/// Training procedure used when curves cannot be loaded
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainerKind {
    /// No trainer: fail if training is needed
    Unavailable,
    /// Seeded synthetic curves
    Synthetic,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Directory with model_checkpoint.pth and the curve files
    #[arg(long, default_value = "save_data")]
    pub save_dir: String,

    /// Resume the previous run through the trainer
    #[arg(long)]
    pub resume: bool,

    /// Which trainer to fall back to
    #[arg(long, value_enum, default_value_t = TrainerKind::Unavailable)]
    pub trainer: TrainerKind,

    /// Epochs for the synthetic trainer
    #[arg(long, default_value_t = 20)]
    pub epochs: usize,

    /// RNG seed for the synthetic trainer
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write a fresh run's curves to --save-dir
    #[arg(long)]
    pub persist: bool,

    /// Write the SVG figure here instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}

impl From<&ReportArgs> for ReportConfig {
    fn from(a: &ReportArgs) -> Self {
        ReportConfig {
            save_dir: a.save_dir.clone(),
            resume:   a.resume,
            persist:  a.persist,
        }
    }
}
