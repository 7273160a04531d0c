// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// diagnostics work with. No file I/O, no plotting, no CLI types.
//
//   identifier.rs - opaque ids read from the "id" column
//   curves.rs     - loss and accuracy curves of one training run
//   error.rs      - the failure taxonomy shared by both tools
//   traits.rs     - seams other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Opaque identifier compared by its canonical text form
pub mod identifier;

/// Loss / accuracy curves produced by one training run
pub mod curves;

/// FileNotFound / Parse / TrainerUnavailable
pub mod error;

/// IdentifierSource and Trainer abstractions
pub mod traits;
