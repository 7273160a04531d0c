// ============================================================
// Layer 5 - Training Procedures
// ============================================================
// Implementations of domain::traits::Trainer that ship with the
// binary. A real training loop (model, optimizer, loaders) lives
// outside this crate and plugs in through the same trait.
//
//   trainer.rs - UnavailableTrainer: the "no trainer wired in"
//                case, fails with TrainerUnavailable
//              - SyntheticTrainer: seeded, plausible curves for
//                demos and for exercising the chart path
//
// Reference: Rust Book §10 (Traits), §17 (Trait Objects)

/// Built-in Trainer implementations
pub mod trainer;
