// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments, picks the trainer, and is the only layer
// that writes to stdout. Logs go to stderr so stdout stays
// machine-readable:
//
//   overlap → two lines: total ids, overlapping ids
//   report  → the SVG figure (or a file via --output)
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, OverlapArgs, ReportArgs, TrainerKind};

use crate::application::overlap_use_case::{OverlapReport, OverlapUseCase};
use crate::application::report_use_case::{ReportConfig, ReportUseCase};
use crate::domain::traits::Trainer;
use crate::ml::trainer::{SyntheticTrainer, UnavailableTrainer};

#[derive(Parser, Debug)]
#[command(
    name = "run-diagnostics",
    version,
    about = "Check prediction id coverage and render training curves."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Overlap(args) => run_overlap(args),
            Commands::Report(args)  => run_report(args),
        }
    }
}

fn run_overlap(args: OverlapArgs) -> Result<()> {
    let report = OverlapUseCase::new(args.into()).execute()?;
    print!("{}", render_overlap(&report));
    Ok(())
}

/// Stdout form of an overlap report: total first, overlap second.
fn render_overlap(report: &OverlapReport) -> String {
    format!("{}\n{}\n", report.total, report.overlap)
}

fn run_report(args: ReportArgs) -> Result<()> {
    let config = ReportConfig::from(&args);
    match args.trainer {
        TrainerKind::Unavailable => report_with(config, UnavailableTrainer, args.output.as_deref()),
        TrainerKind::Synthetic   => {
            report_with(config, SyntheticTrainer::new(args.epochs, args.seed), args.output.as_deref())
        }
    }
}

fn report_with<T: Trainer>(config: ReportConfig, trainer: T, output: Option<&str>) -> Result<()> {
    let report = ReportUseCase::new(config, trainer).execute()?;
    if let Some(acc) = report.curves.final_validation_accuracy() {
        tracing::info!(origin = ?report.origin, "Final validation accuracy {:.3}", acc);
    }

    match output {
        Some(path) => {
            std::fs::write(path, &report.svg)
                .with_context(|| format!("Cannot write figure to '{path}'"))?;
            tracing::info!("Figure written to '{}'", path);
        }
        None => println!("{}", report.svg),
    }
    Ok(())
}
