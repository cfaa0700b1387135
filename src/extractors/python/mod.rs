/// Python extractor for building definition catalogs from Python source code
///
/// This module is organized into focused sub-modules:
/// - definitions: Definition matching, name and kind resolution
/// - docstrings: First-statement docstring recovery
pub(crate) mod definitions;
pub(crate) mod docstrings;

use crate::error::Result;
use crate::extractors::base::{
    walk_tree, BaseExtractor, DefinitionRecord, ExtractionConfig, SyntaxNode,
};
use std::path::Path;

/// Python extractor for class and function definitions
pub struct PythonExtractor {
    base: BaseExtractor,
}

impl PythonExtractor {
    pub fn new(file_path: impl AsRef<Path>, content: Vec<u8>, config: ExtractionConfig) -> Self {
        Self {
            base: BaseExtractor::new("python".to_string(), file_path, content, config),
        }
    }

    /// Extract all definitions, in pre-order, from the tree rooted at `root`
    pub fn extract_definitions<N: SyntaxNode>(&self, root: &N) -> Result<Vec<DefinitionRecord>> {
        let mut records = Vec::new();

        walk_tree(root, None, &mut |node: &N, parent: Option<&N>| -> Result<()> {
            if let Some(record) = definitions::classify(self, node, parent)? {
                records.push(record);
            }
            Ok(())
        })?;

        Ok(records)
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::DefinitionKind;
    use tree_sitter::Parser;

    fn extract(code: &str) -> Vec<DefinitionRecord> {
        extract_with(code, ExtractionConfig::default())
    }

    fn extract_with(code: &str, config: ExtractionConfig) -> Vec<DefinitionRecord> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();

        let extractor = PythonExtractor::new("test.py", code.as_bytes().to_vec(), config);
        extractor.extract_definitions(&tree.root_node()).unwrap()
    }

    fn names(records: &[DefinitionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_class_with_method() {
        let code = "class A:\n    \"\"\"Doc A\"\"\"\n    def m(self):\n        pass\n";
        let records = extract(code);

        assert_eq!(
            records,
            vec![
                DefinitionRecord {
                    name: "A".to_string(),
                    kind: DefinitionKind::Class,
                    start_line: 1,
                    end_line: 4,
                    docstring: Some("Doc A".to_string()),
                },
                DefinitionRecord {
                    name: "m".to_string(),
                    kind: DefinitionKind::Function,
                    start_line: 3,
                    end_line: 4,
                    docstring: None,
                },
            ]
        );
    }

    #[test]
    fn test_docstring_only_from_first_statement() {
        let code = r#"
def documented():
    "doc"
    x = 1

def late():
    x = 1
    "doc"
"#;
        let records = extract(code);

        assert_eq!(names(&records), vec!["documented", "late"]);
        assert_eq!(records[0].docstring.as_deref(), Some("doc"));
        assert_eq!(records[1].docstring, None);
    }

    #[test]
    fn test_non_string_expression_is_not_docstring() {
        let code = r#"
def f():
    "a" "b"
    return 1

def g():
    "doc", 1

def h():
    42
"#;
        let records = extract(code);

        assert_eq!(names(&records), vec!["f", "g", "h"]);
        assert!(records.iter().all(|r| r.docstring.is_none()));
    }

    #[test]
    fn test_decorated_function_yields_single_record() {
        let code = r#"
@staticmethod
@cache(maxsize=1)
def cached():
    """Cached value."""
    return 1
"#;
        let records = extract(code);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "cached");
        assert_eq!(record.kind, DefinitionKind::Function);
        // Span starts on the first decorator line
        assert_eq!((record.start_line, record.end_line), (2, 6));
        assert_eq!(record.docstring.as_deref(), Some("Cached value."));
    }

    #[test]
    fn test_decorated_class_is_class() {
        let code = r#"
@dataclass
class Point:
    '''A point.'''
    x: int

    @property
    def norm(self):
        return self.x
"#;
        let records = extract(code);

        assert_eq!(names(&records), vec!["Point", "norm"]);
        assert_eq!(records[0].kind, DefinitionKind::Class);
        assert_eq!(records[0].docstring.as_deref(), Some("A point."));
        assert_eq!((records[0].start_line, records[0].end_line), (2, 9));
        assert_eq!(records[1].kind, DefinitionKind::Function);
        assert_eq!((records[1].start_line, records[1].end_line), (7, 9));
    }

    #[test]
    fn test_nested_definitions_follow_enclosing_ones() {
        let code = r#"
def outer():
    def inner():
        class Local:
            pass
        return Local
    if True:
        def conditional():
            pass
    return inner

class Top:
    class Nested:
        def deep(self):
            pass
"#;
        let records = extract(code);

        assert_eq!(
            names(&records),
            vec!["outer", "inner", "Local", "conditional", "Top", "Nested", "deep"]
        );
        for window in records.windows(2) {
            assert!(window[0].start_line <= window[1].start_line);
        }
    }

    #[test]
    fn test_record_count_matches_definition_nodes() {
        let code = r#"
import functools

@functools.wraps
def a():
    pass

class B:
    def c(self):
        lambda: None

    @classmethod
    def d(cls):
        def e():
            pass

async def f():
    pass
"#;
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();

        // Count definition nodes not already covered by a decorated wrapper
        let mut expected = 0;
        walk_tree(
            &tree.root_node(),
            None,
            &mut |node: &tree_sitter::Node, parent: Option<&tree_sitter::Node>| {
                let wrapped = node.kind() != "decorated_definition"
                    && parent.is_some_and(|p| p.kind() == "decorated_definition");
                if definitions::is_definition_kind(node.kind()) && !wrapped {
                    expected += 1;
                }
                Ok::<(), std::convert::Infallible>(())
            },
        )
        .unwrap();

        let records = extract(code);
        assert_eq!(records.len(), expected);
        assert_eq!(names(&records), vec!["a", "B", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_line_span_invariants() {
        let code = "def one(): pass\n\nclass Two:\n    x = 1\n";
        for record in extract(code) {
            assert!(record.start_line >= 1);
            assert!(record.start_line <= record.end_line);
        }
    }

    #[test]
    fn test_docstring_config() {
        let code = "def f():\n    \"\"\"A rather long docstring.\"\"\"\n";

        let disabled = extract_with(
            code,
            ExtractionConfig {
                extract_docstrings: false,
                ..Default::default()
            },
        );
        assert_eq!(disabled[0].docstring, None);

        let truncated = extract_with(
            code,
            ExtractionConfig {
                max_docstring_chars: Some(8),
                ..Default::default()
            },
        );
        assert_eq!(truncated[0].docstring.as_deref(), Some("A rather..."));
    }

    #[test]
    fn test_broken_source_still_catalogs() {
        let code = "def ok():\n    pass\n\ndef broken(:\n";
        let records = extract(code);
        assert!(records.iter().any(|r| r.name == "ok"));
    }

    #[test]
    fn test_empty_source() {
        assert!(extract("").is_empty());
        assert!(extract("# just a comment\nx = 1\n").is_empty());
    }
}
