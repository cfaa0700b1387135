// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for definition catalogs and source
// segments.

use super::PyDefinition;
use crate::extractors::{ExtractionConfig, ExtractorManager};
use pyo3::prelude::*;

/// Extract class and function definitions from a Python file
///
/// Args:
///     file_path (str): Path of the file to index
///
/// Returns:
///     list[Definition]: Definitions in pre-order (enclosing before nested).
///                       Empty if the file does not exist.
///
/// Raises:
///     IOError: If the file exists but cannot be read
///     ValueError: If a name or docstring is not valid UTF-8
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn extract_definitions(file_path: &str) -> PyResult<Vec<PyDefinition>> {
    let mut manager = ExtractorManager::new()?;
    let records = manager.extract_definitions(file_path)?;

    Ok(records.into_iter().map(PyDefinition::from_record).collect())
}

/// Return lines start_line..=end_line (1-based) of a file verbatim
///
/// Args:
///     file_path (str): Path of the file
///     start_line (int): First line, 1-based
///     end_line (int): Last line, inclusive
///
/// Returns:
///     str: The lines including their terminators
///
/// Raises:
///     FileNotFoundError: If the file does not exist
#[pyfunction]
#[pyo3(signature = (file_path, start_line, end_line))]
pub fn get_source_segment(file_path: &str, start_line: u32, end_line: u32) -> PyResult<String> {
    Ok(crate::segment::get_source_segment(
        file_path, start_line, end_line,
    )?)
}

/// Extract definitions from multiple files in parallel
///
/// Releases the GIL while extracting. Files that fail are logged and return an
/// empty list; output order matches input order.
///
/// Args:
///     file_paths (list[str]): Paths of the files to index
///
/// Returns:
///     list[list[Definition]]: One catalog per input path
#[pyfunction]
#[pyo3(signature = (file_paths))]
pub fn extract_definitions_batch(
    py: Python<'_>,
    file_paths: Vec<String>,
) -> Vec<Vec<PyDefinition>> {
    // Release GIL for parallel processing
    let catalogs = py.detach(move || {
        ExtractorManager::extract_definitions_batch(&file_paths, &ExtractionConfig::default())
    });

    catalogs
        .into_iter()
        .map(|records| records.into_iter().map(PyDefinition::from_record).collect())
        .collect()
}
