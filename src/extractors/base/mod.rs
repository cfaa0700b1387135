// Base Extractor Types and Traits
//
// Grammar-independent building blocks shared by language extractors:
// - types.rs: DefinitionRecord, DefinitionKind, ExtractionConfig
// - extractor.rs: BaseExtractor (source bytes + strict node text decoding)
// - tree_methods.rs: SyntaxNode node view and the pre-order tree walker

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use tree_methods::{walk_tree, SyntaxNode};
pub use types::{DefinitionKind, DefinitionRecord, ExtractionConfig};
