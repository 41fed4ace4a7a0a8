//! Fluent assertion API for node trees

use crate::mark::ast::{Node, Range};
use crate::mark::token::NodeKind;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder rooted at `node`
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            &expected,
            "{}: expected kind {}, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    /// Assert the full matched text
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            expected,
            "{}: text mismatch",
            self.context
        );
        self
    }

    /// Assert the concatenated text of the leaves under this node
    pub fn leaf_text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.leaf_text(),
            expected,
            "{}: leaf text mismatch",
            self.context
        );
        self
    }

    pub fn range(self, begin: usize, end: usize) -> Self {
        assert_eq!(
            self.node.range(),
            Range::new(begin, end),
            "{}: range mismatch",
            self.context
        );
        self
    }

    /// Assert a named capture group participated with the given text
    pub fn group(self, name: &str, expected: &str) -> Self {
        assert_eq!(
            self.node.group(name),
            Some(expected),
            "{}: group '{}' mismatch",
            self.context,
            name
        );
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        assert_eq!(
            self.node.depth(),
            expected,
            "{}: depth mismatch",
            self.context
        );
        self
    }

    pub fn is_leaf(self) -> Self {
        assert!(
            self.node.is_leaf(),
            "{}: expected a leaf, found children [{}]",
            self.context,
            summarize(self.node.children())
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert the kinds of all children, in order
    pub fn child_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<&NodeKind> = self.node.children().iter().map(Node::kind).collect();
        let expected: Vec<&NodeKind> = expected.iter().collect();
        assert_eq!(actual, expected, "{}: child kinds mismatch", self.context);
        self
    }

    /// Assert on a specific child by index
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children: [{}])",
            self.context,
            index,
            children.len(),
            summarize(children)
        );

        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Run [assert_well_formed] on this subtree
    pub fn well_formed(self) -> Self {
        assert_well_formed(self.node);
        self
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| format!("{} {}", n.kind(), n.range()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Structural Checks
// ============================================================================

/// Assert that `nodes` tile `range` exactly: sorted, contiguous, no gaps
pub fn assert_partition(nodes: &[Node], range: Range) {
    let mut cursor = range.begin;
    for node in nodes {
        assert_eq!(
            node.range().begin,
            cursor,
            "expected a node starting at {} inside {}, found [{}]",
            cursor,
            range,
            summarize(nodes)
        );
        cursor = node.range().end;
    }
    assert_eq!(
        cursor,
        range.end,
        "nodes stop at {} but {} ends at {}: [{}]",
        cursor,
        range,
        range.end,
        summarize(nodes)
    );
}

/// Assert the structural properties of a processed tree
///
/// Children must be sorted by range, must not overlap and must lie inside the parent's
/// content span. Each child's text must be the slice of the parent's text its range names,
/// and its depth must be one more than the parent's. Literal kinds are leaves and inline
/// kinds never contain block kinds.
pub fn assert_well_formed(node: &Node) {
    let content = node.content().range();

    assert!(
        !node.kind().is_literal() || node.is_leaf(),
        "literal {} {} has children: [{}]",
        node.kind(),
        node.range(),
        summarize(node.children())
    );
    if !node.kind().is_block() {
        if let Some(block) = node.children().iter().find(|c| c.kind().is_block()) {
            panic!(
                "inline {} {} contains block {} {}",
                node.kind(),
                node.range(),
                block.kind(),
                block.range()
            );
        }
    }

    for pair in node.children().windows(2) {
        assert!(
            pair[0].range().end <= pair[1].range().begin,
            "children of {} {} overlap or are unsorted: {} then {}",
            node.kind(),
            node.range(),
            pair[0].range(),
            pair[1].range()
        );
    }

    for child in node.children() {
        assert!(
            content.encloses(&child.range()),
            "{} {} lies outside its parent's content {}",
            child.kind(),
            child.range(),
            content
        );
        let slice = &node.content().text
            [child.range().begin - content.begin..child.range().end - content.begin];
        assert_eq!(
            child.text(),
            slice,
            "{} {} text does not match its range",
            child.kind(),
            child.range()
        );
        assert_eq!(child.depth(), node.depth() + 1);
        assert_eq!(child.parent().map(|p| p.range), Some(node.range()));

        assert_well_formed(child);
    }
}
