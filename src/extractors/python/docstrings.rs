/// Docstring recovery
/// Only the first statement of a body is examined; a later bare string is never a docstring
use super::super::base::{BaseExtractor, SyntaxNode};
use super::PythonExtractor;
use crate::error::Result;

/// Extract docstring from a function or class
pub(super) fn extract_docstring<N: SyntaxNode>(
    extractor: &PythonExtractor,
    node: &N,
) -> Result<Option<String>> {
    let config = &extractor.base().config;
    if !config.extract_docstrings {
        return Ok(None);
    }

    let Some(body_node) = node.child_by_field_name("body") else {
        return Ok(None);
    };
    let Some(first_statement) = body_node.first_child() else {
        return Ok(None);
    };
    let Some(literal) = bare_string_literal(&first_statement) else {
        return Ok(None);
    };

    let raw = extractor.base().get_node_text(&literal)?;
    let docstring = strip_string_delimiters(&raw);

    Ok(Some(match config.max_docstring_chars {
        Some(max_chars) => BaseExtractor::truncate_string(docstring, max_chars),
        None => docstring.to_string(),
    }))
}

/// The string node of an expression_statement that holds nothing else
fn bare_string_literal<N: SyntaxNode>(statement: &N) -> Option<N> {
    if statement.kind() != "expression_statement" {
        return None;
    }

    let mut children = statement.children();
    if children.len() != 1 || children[0].kind() != "string" {
        return None;
    }
    children.pop()
}

/// Strip quote characters and whitespace from both ends of a string literal
///
/// Prefixes such as `r` or `f` are not quotes and stay in place.
pub fn strip_string_delimiters(s: &str) -> &str {
    s.trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
}
