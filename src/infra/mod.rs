// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
//   checkpoint.rs - the save directory: artifact presence check,
//                   checkpoint loading, and the opt-in persistence
//                   of a fresh run's curves (checkpoint + one JSON
//                   file per curve, each written atomically)
//
//   chart.rs      - renders the 2x2 curve figure as SVG using
//                   plotters' SVG backend (no system fonts needed)
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Save directory artifacts and the checkpoint file
pub mod checkpoint;

/// 2x2 training curve figure
pub mod chart;
