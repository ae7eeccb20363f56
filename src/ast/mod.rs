//! AST module for revnest
//!
//! A parsed list is a tree of [`Node`]s: single-character leaves and nested
//! lists. Trees are built bottom-up by the parser and never mutated afterwards.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::Serialize;
use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One element of a parsed list.
///
/// # Examples
///
/// ```rust
/// use revnest::ast::Node;
/// let list = Node::List(vec![Node::Leaf('a'), Node::List(vec![])]);
/// assert_eq!(list.to_string(), "[a, []]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A single non-delimiter character.
    Leaf(char),
    /// An ordered sequence of nodes, one nesting level.
    List(Vec<Node>),
}

// ============================================================================
// TREE OPERATIONS
// ============================================================================

impl Node {
    /// Reverses element order at every nesting level.
    ///
    /// Applying it twice yields the original tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use revnest::ast::Node;
    /// let tree = Node::List(vec![
    ///     Node::Leaf('a'),
    ///     Node::List(vec![Node::Leaf('b'), Node::Leaf('c')]),
    /// ]);
    /// assert_eq!(tree.reversed().to_string(), "[[c, b], a]");
    /// assert_eq!(tree.reversed().reversed(), tree);
    /// ```
    pub fn reversed(&self) -> Node {
        match self {
            Node::Leaf(c) => Node::Leaf(*c),
            Node::List(items) => Node::List(items.iter().rev().map(Node::reversed).collect()),
        }
    }

    /// Nesting depth: 0 for a leaf, 1 plus the deepest child for a list.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::List(items) => 1 + items.iter().map(Node::depth).max().unwrap_or(0),
        }
    }

    /// Number of leaves anywhere in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::List(items) => items.iter().map(Node::leaf_count).sum(),
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Node]) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(c) => write!(f, "{}", c),
            Node::List(items) => Node::fmt_list(f, items),
        }
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(s: &str) -> Vec<Node> {
        s.chars().map(Node::Leaf).collect()
    }

    #[test]
    fn displays_nested_lists_without_quotes() {
        let tree = Node::List(vec![
            Node::List(leaves("43")),
            Node::Leaf('2'),
            Node::Leaf('1'),
        ]);
        assert_eq!(tree.to_string(), "[[4, 3], 2, 1]");
    }

    #[test]
    fn displays_empty_list() {
        assert_eq!(Node::List(vec![]).to_string(), "[]");
        assert_eq!(Node::List(vec![Node::List(vec![])]).to_string(), "[[]]");
    }

    #[test]
    fn reversed_reverses_every_level() {
        let tree = Node::List(vec![
            Node::Leaf('a'),
            Node::List(vec![Node::Leaf('b'), Node::List(leaves("cd"))]),
            Node::Leaf('e'),
        ]);
        assert_eq!(tree.reversed().to_string(), "[e, [[d, c], b], a]");
    }

    #[test]
    fn reversed_twice_is_identity() {
        let tree = Node::List(vec![
            Node::List(vec![]),
            Node::List(vec![Node::List(leaves("xyz")), Node::Leaf('q')]),
            Node::Leaf('1'),
        ]);
        assert_eq!(tree.reversed().reversed(), tree);
    }

    #[test]
    fn depth_and_leaf_count() {
        let tree = Node::List(vec![
            Node::Leaf('a'),
            Node::List(vec![Node::Leaf('b'), Node::List(leaves("cd"))]),
        ]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(Node::Leaf('x').depth(), 0);
        assert_eq!(Node::List(vec![]).depth(), 1);
        assert_eq!(Node::List(vec![]).leaf_count(), 0);
    }

    #[test]
    fn serializes_as_plain_json_arrays() {
        let tree = Node::List(vec![Node::List(leaves("43")), Node::Leaf('1')]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"[["4","3"],"1"]"#);
    }
}
