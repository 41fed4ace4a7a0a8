//! Syntax nodes
//!
//!     A node is the span produced for one match. Besides what it matched, it knows which part
//!     of itself to re-lex ([Content]) and with which definitions (its nested token set).
//!     Calling [Node::process] runs a fresh lexer over that content and stores the result as
//!     the node's children, which in turn process their own content, depth first.
//!
//!     Nodes refer to their parent through a [ParentRef]: a small, owned description of the
//!     parent (kind, range, depth) rather than a pointer. The tree itself is owned top down.

use super::groups::MatchGroups;
use super::range::Range;
use crate::mark::lexing::{Lexer, LexerError, LexerOptions};
use crate::mark::token::{empty_tokens, NodeKind, TokenMatch, TokenSet};
use std::fmt;

/// Non-owning description of a node's parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub kind: NodeKind,
    pub range: Range,
    pub depth: usize,
}

/// The part of a node that is re-lexed by its nested token set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub text: String,
    /// Absolute offset of `text` in the root text
    pub offset: usize,
}

impl Content {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    pub fn range(&self) -> Range {
        Range::new(self.offset, self.offset + self.text.len())
    }
}

#[derive(Clone)]
pub struct Node {
    kind: NodeKind,
    text: String,
    range: Range,
    groups: MatchGroups,
    parent: Option<ParentRef>,
    depth: usize,
    content: Content,
    nested: TokenSet,
    children: Vec<Node>,
}

impl Node {
    /// Build a leaf node from a match; content defaults to the whole match
    pub fn from_match(kind: NodeKind, matched: TokenMatch<'_>) -> Self {
        let depth = matched.parent.map_or(0, |parent| parent.depth + 1);
        Self {
            kind,
            text: matched.text.to_string(),
            range: matched.range,
            groups: matched.groups,
            parent: matched.parent.cloned(),
            depth,
            content: Content::new(matched.text, matched.range.begin),
            nested: empty_tokens(),
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn with_nested(mut self, nested: TokenSet) -> Self {
        self.nested = nested;
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordering key of the node
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn groups(&self) -> &MatchGroups {
        &self.groups
    }

    /// Text of a named capture group of the match
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.text(name)
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn nested_tokens(&self) -> &TokenSet {
        &self.nested
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Describe this node for the lexer that builds its children
    pub fn as_parent(&self) -> ParentRef {
        ParentRef {
            kind: self.kind.clone(),
            range: self.range,
            depth: self.depth,
        }
    }

    /// Lex this node's content with its nested token set and attach the results
    pub fn process(&mut self, options: &LexerOptions) -> Result<(), LexerError> {
        if self.nested.is_empty() {
            return Ok(());
        }

        let children = Lexer::new(&self.content.text, self.nested.clone())
            .offset(self.content.offset)
            .parent(self.as_parent())
            .options(options.clone())
            .process()?;
        self.children = children;
        Ok(())
    }

    /// All descendants of the given kind, in document order
    pub fn find_all(&self, kind: &NodeKind) -> Vec<&Node> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.kind() == kind {
                found.push(child);
            }
            found.extend(child.find_all(kind));
        }
        found
    }

    /// Concatenated text of the leaves below this node, or its own text for a leaf
    pub fn leaf_text(&self) -> String {
        if self.children.is_empty() {
            return self.text.clone();
        }
        self.children.iter().map(Node::leaf_text).collect()
    }

    fn nested_names(&self) -> Vec<&str> {
        self.nested.iter().map(|token| token.name()).collect()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.range == other.range
            && self.groups == other.groups
            && self.parent == other.parent
            && self.depth == other.depth
            && self.content == other.content
            && self.nested_names() == other.nested_names()
            && self.children == other.children
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("range", &self.range)
            .field("text", &self.text)
            .field("nested", &self.nested_names())
            .field("children", &self.children)
            .finish()
    }
}
