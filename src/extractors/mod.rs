//! Language Extractors Module
//!
//! tree-sitter based extractors that turn a parsed source file into a flat,
//! pre-ordered catalog of class and function definitions.
//!
//! # Architecture
//!
//! - `base` - Grammar-independent record types, node view and tree walker
//! - `manager` - ExtractorManager public API (owns the parser)
//! - `python` - Definition classifier for the Python grammar

pub mod base;
pub mod manager;
pub mod python;

// Re-export the public API
pub use base::{DefinitionKind, DefinitionRecord, ExtractionConfig, SyntaxNode};
pub use manager::ExtractorManager;
