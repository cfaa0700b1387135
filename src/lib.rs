// Akita Core - tree-sitter structural indexer
//
// Builds flat, pre-ordered catalogs of class and function definitions from a
// source file, and re-extracts verbatim source for any line range. With the
// `python` feature the crate also builds as a Python extension module.

pub mod error;
pub mod extractors;
pub mod language;
pub mod segment;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{IndexError, Result};
pub use extractors::{DefinitionKind, DefinitionRecord, ExtractionConfig, ExtractorManager};
pub use segment::get_source_segment;

/// Extract the definition catalog of a file with a fresh parser
///
/// Callers indexing many files should keep an `ExtractorManager` instead.
pub fn extract_definitions(
    file_path: impl AsRef<std::path::Path>,
) -> Result<Vec<DefinitionRecord>> {
    ExtractorManager::new()?.extract_definitions(file_path)
}

/// Akita Core Python module
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn akita_core(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::prelude::*;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(bindings::extract_definitions, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::get_source_segment, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_definitions_batch, m)?)?;

    m.add_class::<bindings::PyDefinition>()?;

    Ok(())
}
