// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - no parsing or file formats here (Layer 4 / Layer 6)
//   - no printing here (Layer 1)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Test ids vs. prediction ids
pub mod overlap_use_case;

// Load-or-train, then render the curve figure
pub mod report_use_case;
