// PyO3 Bindings Module
//
// Exposes the definition catalog and segment extraction to Python callers.
// Rust types are wrapped in PyO3-compatible types here; nothing else in the crate
// depends on pyo3.

mod api;
mod definition;
mod errors;

// Re-export for lib.rs
pub use api::{extract_definitions, extract_definitions_batch, get_source_segment};
pub use definition::PyDefinition;
