//! Language Support - tree-sitter grammar configuration
//!
//! The indexer currently ships a single grammar (Python). All grammar lookup goes
//! through this module so the manager never names a grammar crate directly.

use crate::error::{IndexError, Result};

/// Get tree-sitter language for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "python" => Ok(tree_sitter_python::LANGUAGE.into()),
        _ => Err(IndexError::UnsupportedLanguage(language.to_string())),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "py" | "pyi" | "pyw" => Some("python"),
        _ => None,
    }
}

/// All language names accepted by `get_tree_sitter_language()`
pub fn supported_languages() -> &'static [&'static str] {
    &["python"]
}
