// Error taxonomy for definition extraction and segment retrieval
//
// Structural gaps in a well-formed tree (no name, no body, empty body) are not
// errors; they degrade to defaults inside the extractors. Only I/O, encoding and
// parser setup failures surface here.

use std::path::PathBuf;

/// Errors surfaced by the indexer
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to set parser language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse file: {}", .path.display())]
    Parse { path: PathBuf },

    #[error("Unsupported language: '{0}'. Supported languages: python")]
    UnsupportedLanguage(String),
}

impl IndexError {
    /// True when the underlying read failed because the file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IndexError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
