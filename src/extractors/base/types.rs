// Base Extractor Types
//
// Plain data produced by one extraction call. Records hold no tree-sitter handles,
// so a catalog can outlive the parser and tree it came from.

use serde::{Deserialize, Serialize};

/// Configuration for definition extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Whether to recover docstrings at all
    pub extract_docstrings: bool,
    /// Maximum docstring length in characters (longer ones get truncated)
    pub max_docstring_chars: Option<usize>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extract_docstrings: true,
            max_docstring_chars: None,
        }
    }
}

/// Kind of definition. Decorated definitions carry the kind of what they wrap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Class,
    Function,
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionKind::Class => write!(f, "class"),
            DefinitionKind::Function => write!(f, "function"),
        }
    }
}

/// A class or function definition found in a source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefinitionRecord {
    /// Identifier text, or `"anonymous"` when no name node could be resolved
    pub name: String,
    pub kind: DefinitionKind,
    /// Start line number (1-based, includes decorators)
    pub start_line: u32,
    /// End line number (1-based, inclusive)
    pub end_line: u32,
    /// Bare string literal opening the body, quotes and whitespace stripped
    pub docstring: Option<String>,
}

impl DefinitionRecord {
    /// Number of source lines spanned by this definition (1 for an inverted span)
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}
