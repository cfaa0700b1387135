// Tree navigation for extractors
//
// `SyntaxNode` is the slice of a concrete syntax tree the extractors rely on:
// a type tag, row span, byte range, ordered children and field lookups.
// tree-sitter nodes implement it below; extractors never touch grammar types.

use std::ops::Range;
use tree_sitter::Node;

/// Read-only view of a syntax tree node
pub trait SyntaxNode: Sized + Clone {
    /// Node type tag (e.g. "class_definition")
    fn kind(&self) -> &str;
    /// Start row, 0-based
    fn start_row(&self) -> usize;
    /// End row, 0-based
    fn end_row(&self) -> usize;
    /// Byte range into the source buffer
    fn byte_range(&self) -> Range<usize>;
    /// All children in source order (named and anonymous)
    fn children(&self) -> Vec<Self>;
    /// Child stored under a grammar field such as "name", "body" or "definition"
    fn child_by_field_name(&self, field_name: &str) -> Option<Self>;

    /// First child, if any
    fn first_child(&self) -> Option<Self> {
        self.children().into_iter().next()
    }
}

impl<'tree> SyntaxNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn start_row(&self) -> usize {
        self.start_position().row
    }

    fn end_row(&self) -> usize {
        self.end_position().row
    }

    fn byte_range(&self) -> Range<usize> {
        self.start_byte()..self.end_byte()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        Node::children(self, &mut cursor).collect()
    }

    fn child_by_field_name(&self, field_name: &str) -> Option<Self> {
        Node::child_by_field_name(self, field_name)
    }

    fn first_child(&self) -> Option<Self> {
        self.child(0)
    }
}

/// Walk tree in pre-order, visiting every node exactly once
///
/// The visitor receives each node together with its parent. Descent never
/// depends on the node type, so definitions nested under any construct are
/// reached. The first visitor error stops the walk.
///
/// Uses an explicit stack, so nesting depth is bounded by heap, not thread stack.
pub fn walk_tree<N, F, E>(node: &N, parent: Option<&N>, visitor: &mut F) -> Result<(), E>
where
    N: SyntaxNode,
    F: FnMut(&N, Option<&N>) -> Result<(), E>,
{
    let mut stack: Vec<(N, Option<N>)> = vec![(node.clone(), parent.cloned())];

    while let Some((current, current_parent)) = stack.pop() {
        visitor(&current, current_parent.as_ref())?;

        // Reversed so the leftmost child is popped first
        for child in current.children().into_iter().rev() {
            stack.push((child, Some(current.clone())));
        }
    }

    Ok(())
}
