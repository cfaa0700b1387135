/// Definition matching, name and kind resolution
/// Handles plain class/function definitions and decorator-wrapped ones
use super::super::base::{DefinitionKind, DefinitionRecord, SyntaxNode};
use super::{docstrings, PythonExtractor};
use crate::error::Result;

pub(super) const CLASS_DEFINITION: &str = "class_definition";
pub(super) const FUNCTION_DEFINITION: &str = "function_definition";
pub(super) const DECORATED_DEFINITION: &str = "decorated_definition";

const ANONYMOUS: &str = "anonymous";

/// Does this node tag denote a definition?
pub(super) fn is_definition_kind(kind: &str) -> bool {
    matches!(
        kind,
        CLASS_DEFINITION | FUNCTION_DEFINITION | DECORATED_DEFINITION
    )
}

/// Classify one visited node, producing a record when it is a definition
///
/// A class/function node directly under a decorated_definition is skipped: the
/// wrapper already produced its record, with the span covering the decorators.
pub(super) fn classify<N: SyntaxNode>(
    extractor: &PythonExtractor,
    node: &N,
    parent: Option<&N>,
) -> Result<Option<DefinitionRecord>> {
    if !is_definition_kind(node.kind()) {
        return Ok(None);
    }
    if node.kind() != DECORATED_DEFINITION
        && parent.is_some_and(|p| p.kind() == DECORATED_DEFINITION)
    {
        return Ok(None);
    }

    // For decorated definitions, name/kind/docstring live on the wrapped node
    let inner = wrapped_definition(node);
    let target = inner.as_ref().unwrap_or(node);

    let name = resolve_name(extractor, node, inner.as_ref())?;
    let kind = resolve_kind(target);
    let docstring = docstrings::extract_docstring(extractor, target)?;

    Ok(Some(DefinitionRecord {
        name,
        kind,
        start_line: (node.start_row() + 1) as u32,
        end_line: (node.end_row() + 1) as u32,
        docstring,
    }))
}

/// The class/function wrapped by a decorated_definition, if any
fn wrapped_definition<N: SyntaxNode>(node: &N) -> Option<N> {
    if node.kind() != DECORATED_DEFINITION {
        return None;
    }
    node.child_by_field_name("definition")
}

/// Resolve the definition name: own "name" field, then the wrapped node's, then "anonymous"
fn resolve_name<N: SyntaxNode>(
    extractor: &PythonExtractor,
    node: &N,
    inner: Option<&N>,
) -> Result<String> {
    let base = extractor.base();

    if let Some(name) = base.get_field_text(node, "name")? {
        return Ok(name);
    }
    if let Some(inner) = inner {
        if let Some(name) = base.get_field_text(inner, "name")? {
            return Ok(name);
        }
    }

    Ok(ANONYMOUS.to_string())
}

/// Class if the tag mentions "class", function otherwise
fn resolve_kind<N: SyntaxNode>(node: &N) -> DefinitionKind {
    if node.kind().contains("class") {
        DefinitionKind::Class
    } else {
        DefinitionKind::Function
    }
}
