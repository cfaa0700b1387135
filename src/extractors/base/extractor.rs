// BaseExtractor
//
// Owns the source bytes for one extraction call and decodes node text from them.
// Decoding is strict: a byte range that is not valid UTF-8 is an error, never a
// lossy substitution, so catalog names and docstrings are always verbatim.

use std::path::{Path, PathBuf};

use super::tree_methods::SyntaxNode;
use super::types::ExtractionConfig;
use crate::error::{IndexError, Result};

/// Shared state for language extractors
pub struct BaseExtractor {
    pub language: String,
    pub file_path: PathBuf,
    pub content: Vec<u8>,
    pub config: ExtractionConfig,
}

impl BaseExtractor {
    pub fn new(
        language: String,
        file_path: impl AsRef<Path>,
        content: Vec<u8>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            language,
            file_path: file_path.as_ref().to_path_buf(),
            content,
            config,
        }
    }

    /// Get text from a node's byte range
    pub fn get_node_text<N: SyntaxNode>(&self, node: &N) -> Result<String> {
        let range = node.byte_range();
        let Some(bytes) = self.content.get(range) else {
            return Ok(String::new());
        };

        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|source| IndexError::Decode {
                path: self.file_path.clone(),
                source,
            })
    }

    /// Get field text, `None` when the field is absent
    pub fn get_field_text<N: SyntaxNode>(
        &self,
        node: &N,
        field_name: &str,
    ) -> Result<Option<String>> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
            .transpose()
    }

    /// Safely truncate a string to a maximum number of characters (not bytes)
    pub fn truncate_string(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
            None => text.to_string(),
        }
    }
}
