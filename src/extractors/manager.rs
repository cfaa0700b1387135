//! ExtractorManager - Public API for definition catalog extraction
//!
//! Owns the tree-sitter parser for one caller. Construct one per thread (or per
//! call) and pass it explicitly; there is no process-wide parser.

use crate::error::{IndexError, Result};
use crate::extractors::base::{DefinitionRecord, ExtractionConfig};
use crate::extractors::python::PythonExtractor;
use anyhow::Context;
use rayon::prelude::*;
use std::path::Path;
use tree_sitter::Parser;

/// Parser plus extraction settings for building definition catalogs
pub struct ExtractorManager {
    parser: Parser,
    language: &'static str,
    config: ExtractionConfig,
}

impl ExtractorManager {
    /// Create a manager with a parser configured for Python
    pub fn new() -> Result<Self> {
        let language = "python";
        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(language)?;
        parser.set_language(&tree_sitter_language)?;

        Ok(Self {
            parser,
            language,
            config: ExtractionConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Update the extraction configuration
    pub fn set_config(&mut self, config: ExtractionConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Extract the definition catalog of a file
    ///
    /// A file that does not exist yields an empty catalog rather than an error.
    /// Any other read failure, or node text that is not valid UTF-8, is an error.
    pub fn extract_definitions(
        &mut self,
        file_path: impl AsRef<Path>,
    ) -> Result<Vec<DefinitionRecord>> {
        let path = file_path.as_ref();
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No such file, empty catalog: {}", path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(IndexError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        self.extract_definitions_from_source(path, content)
    }

    /// Extract the definition catalog of in-memory source
    ///
    /// `file_path` only labels errors; nothing is read from disk.
    pub fn extract_definitions_from_source(
        &mut self,
        file_path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
    ) -> Result<Vec<DefinitionRecord>> {
        let path = file_path.as_ref();
        let content = content.into();

        let tree = self
            .parser
            .parse(&content, None)
            .ok_or_else(|| IndexError::Parse {
                path: path.to_path_buf(),
            })?;

        let extractor = PythonExtractor::new(path, content, self.config.clone());
        let definitions = extractor.extract_definitions(&tree.root_node())?;

        tracing::debug!(
            "Extracted {} definitions from {} file: {}",
            definitions.len(),
            self.language,
            path.display()
        );
        Ok(definitions)
    }

    /// Extract catalogs for many files in parallel
    ///
    /// Each rayon worker owns its own parser. Results keep input order. A file
    /// that fails is logged and contributes an empty catalog, so one bad file
    /// never fails the batch.
    pub fn extract_definitions_batch<P>(
        file_paths: &[P],
        config: &ExtractionConfig,
    ) -> Vec<Vec<DefinitionRecord>>
    where
        P: AsRef<Path> + Sync,
    {
        file_paths
            .par_iter()
            .map_init(
                || ExtractorManager::new().map(|m| m.with_config(config.clone())),
                |manager, file_path| {
                    let path = file_path.as_ref();
                    extract_for_batch(manager, path).unwrap_or_else(|e| {
                        tracing::warn!("{:#}", e);
                        Vec::new()
                    })
                },
            )
            .collect()
    }
}

fn extract_for_batch(
    manager: &mut Result<ExtractorManager>,
    path: &Path,
) -> anyhow::Result<Vec<DefinitionRecord>> {
    let manager = manager
        .as_mut()
        .map_err(|e| anyhow::anyhow!("Parser unavailable: {}", e))?;

    manager
        .extract_definitions(path)
        .with_context(|| format!("Failed to extract definitions from {}", path.display()))
}
