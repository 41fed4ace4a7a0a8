//! The claiming lexer
//!
//!     The lexer partitions a text into nodes using an ordered list of token definitions.
//!     It knows nothing about any grammar: it asks each definition for its pattern, scans the
//!     text no earlier definition has claimed, and hands every accepted match back to the
//!     definition to build a node.
//!
//! Algorithm
//!
//!     For each definition, in order:
//!         1. Compute the available ranges: the text minus everything already claimed,
//!            coalesced into maximal contiguous ranges.
//!         2. Scan each available range for all non-overlapping matches of the pattern.
//!         3. Translate each match to absolute offsets and skip it if an existing node's
//!            anchor (its begin offset) lies inside it.
//!         4. Otherwise build a node and claim its range.
//!
//!     Once every definition had its turn, any text left unclaimed is an error: the grammar
//!     did not cover the input. Each node then processes its own content with its own nested
//!     definitions, and the nodes are returned sorted by range.
//!
//!     This is a flat search: an accepted match is never revisited, even if a later definition
//!     would have matched better. Definition order is the only priority mechanism.
//!
//! Offsets
//!
//!     A nested lexer works on a node's content, a slice of the root text. It is given the
//!     slice's absolute offset so that every range it produces is absolute. Claims are kept in
//!     local offsets.

mod claims;

use crate::mark::ast::{MatchGroups, Node, ParentRef, Range};
use crate::mark::config::LexerConfig;
use crate::mark::token::{BuildError, TokenDefinition, TokenMatch, TokenSet};
use claims::Claims;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default bound on node nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Deepest nesting level a node may be produced at; the root level is 0
    pub max_depth: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&LexerConfig> for LexerOptions {
    fn from(config: &LexerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}

/// Errors that abort a `process` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Text left unclaimed after every definition was tried (absolute ranges)
    Unprocessed { ranges: Vec<Range> },
    /// Nesting went deeper than the configured bound
    DepthExceeded {
        depth: usize,
        max_depth: usize,
        range: Range,
    },
    /// A token definition failed to build its node
    Build(BuildError),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::Unprocessed { ranges } => {
                let spans: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();
                write!(f, "Unprocessed nodes detected: {}", spans.join(", "))
            }
            LexerError::DepthExceeded {
                depth,
                max_depth,
                range,
            } => write!(
                f,
                "Nesting depth {} exceeds the maximum of {} at {}",
                depth, max_depth, range
            ),
            LexerError::Build(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LexerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexerError::Build(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BuildError> for LexerError {
    fn from(err: BuildError) -> Self {
        LexerError::Build(err)
    }
}

/// A single-use lexer over one text
pub struct Lexer<'a> {
    text: &'a str,
    /// Absolute offset of `text` in the root text
    offset: usize,
    tokens: TokenSet,
    parent: Option<ParentRef>,
    options: LexerOptions,
    nodes: Vec<Node>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, tokens: TokenSet) -> Self {
        Self {
            text,
            offset: 0,
            tokens,
            parent: None,
            options: LexerOptions::default(),
            nodes: Vec::new(),
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn parent(mut self, parent: ParentRef) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn options(mut self, options: LexerOptions) -> Self {
        self.options = options;
        self
    }

    /// Run a one-off lexer with a single definition and return its first node
    pub fn single(
        text: &str,
        token: Arc<dyn TokenDefinition>,
    ) -> Result<Option<Node>, LexerError> {
        let tokens: TokenSet = vec![token].into();
        Ok(Lexer::new(text, tokens).process()?.into_iter().next())
    }

    /// Partition the text into nodes, sorted by range
    pub fn process(mut self) -> Result<Vec<Node>, LexerError> {
        if self.tokens.is_empty() {
            return Ok(self.nodes);
        }

        let depth = self.parent.as_ref().map_or(0, |parent| parent.depth + 1);
        if depth > self.options.max_depth {
            let range = self
                .parent
                .as_ref()
                .map_or(self.absolute(Range::new(0, self.text.len())), |p| p.range);
            debug!(depth, max_depth = self.options.max_depth, %range, "nesting too deep");
            return Err(LexerError::DepthExceeded {
                depth,
                max_depth: self.options.max_depth,
                range,
            });
        }

        let mut claims = Claims::new(self.text.len());
        let tokens = Arc::clone(&self.tokens);
        for token in tokens.iter() {
            self.claim_matches(token.as_ref(), &mut claims)?;
        }

        let unclaimed = claims.available();
        if !unclaimed.is_empty() {
            let ranges: Vec<Range> = unclaimed.iter().map(|r| self.absolute(*r)).collect();
            debug!(unclaimed = ranges.len(), depth, "grammar left text unclaimed");
            return Err(LexerError::Unprocessed { ranges });
        }

        for node in &mut self.nodes {
            node.process(&self.options)?;
        }

        self.nodes.sort_by_key(Node::range);
        Ok(self.nodes)
    }

    fn claim_matches(
        &mut self,
        token: &dyn TokenDefinition,
        claims: &mut Claims,
    ) -> Result<(), LexerError> {
        let text = self.text;
        let pattern = token.pattern();
        let available = claims.available();
        trace!(
            token = token.name(),
            windows = available.len(),
            offset = self.offset,
            "scanning available ranges"
        );

        for window in available {
            for captures in pattern.captures_iter(&text[window.span()]) {
                let Some(whole) = captures.get(0) else {
                    continue;
                };
                if whole.start() == whole.end() {
                    continue;
                }

                let local = Range::new(whole.start(), whole.end()).shifted(window.begin);
                if claims.is_blocked(&local) {
                    continue;
                }

                let matched = TokenMatch {
                    text: whole.as_str(),
                    range: self.absolute(local),
                    groups: MatchGroups::from_captures(
                        &captures,
                        pattern,
                        self.offset + window.begin,
                    ),
                    parent: self.parent.as_ref(),
                };
                let node = token.build(matched)?;
                claims.claim(local);
                self.nodes.push(node);
            }
        }

        Ok(())
    }

    fn absolute(&self, local: Range) -> Range {
        local.shifted(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::token::{NodeKind, Token};

    fn token(name: &str, pattern: &str) -> Arc<dyn TokenDefinition> {
        Token::from_pattern(NodeKind::Custom(name.to_string()), pattern)
            .unwrap()
            .shared()
    }

    fn set(tokens: Vec<Arc<dyn TokenDefinition>>) -> TokenSet {
        tokens.into()
    }

    fn summary(nodes: &[Node]) -> Vec<(String, Range)> {
        nodes
            .iter()
            .map(|n| (n.kind().to_string(), n.range()))
            .collect()
    }

    #[test]
    fn test_empty_token_list_is_a_no_op() {
        let nodes = Lexer::new("anything", set(vec![])).process().unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_empty_text_produces_no_nodes() {
        let nodes = Lexer::new("", set(vec![token("any", r"(?s).")]))
            .process()
            .unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_per_character_token_covers_text() {
        let nodes = Lexer::new("hello", set(vec![token("char", r".")]))
            .process()
            .unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0].text(), "h");
        assert_eq!(nodes[4].range(), Range::new(4, 5));
    }

    #[test]
    fn test_uncovered_text_is_an_error() {
        let err = Lexer::new("aXa", set(vec![token("a", r"a")]))
            .process()
            .unwrap_err();
        assert_eq!(
            err,
            LexerError::Unprocessed {
                ranges: vec![Range::new(1, 2)]
            }
        );
        assert!(err.to_string().starts_with("Unprocessed nodes detected"));
    }

    #[test]
    fn test_earlier_definition_wins() {
        let nodes = Lexer::new("ab", set(vec![token("A", r"ab"), token("B", r"a")]))
            .process()
            .unwrap();
        assert_eq!(summary(&nodes), vec![("A".to_string(), Range::new(0, 2))]);
    }

    #[test]
    fn test_reversed_priority_needs_a_catch_all() {
        let err = Lexer::new("ab", set(vec![token("B", r"a"), token("A", r"ab")]))
            .process()
            .unwrap_err();
        assert_eq!(
            err,
            LexerError::Unprocessed {
                ranges: vec![Range::new(1, 2)]
            }
        );

        let nodes = Lexer::new(
            "ab",
            set(vec![token("B", r"a"), token("A", r"ab"), token("rest", r"(?s).+")]),
        )
        .process()
        .unwrap();
        assert_eq!(
            summary(&nodes),
            vec![
                ("B".to_string(), Range::new(0, 1)),
                ("rest".to_string(), Range::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_later_definitions_only_see_unclaimed_windows() {
        // The catch-all must not merge across the claimed "X"
        let nodes = Lexer::new("abXcd", set(vec![token("x", r"X"), token("rest", r".+")]))
            .process()
            .unwrap();
        assert_eq!(
            summary(&nodes),
            vec![
                ("rest".to_string(), Range::new(0, 2)),
                ("x".to_string(), Range::new(2, 3)),
                ("rest".to_string(), Range::new(3, 5)),
            ]
        );
    }

    #[test]
    fn test_windows_are_scanned_in_isolation() {
        // "^" anchors at the start of each window, not just the start of the text
        let nodes = Lexer::new("a-b", set(vec![token("dash", r"-"), token("start", r"^.")]))
            .process()
            .unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].kind(), &NodeKind::Custom("start".into()));
    }

    #[test]
    fn test_nodes_are_sorted_by_range() {
        let nodes = Lexer::new("a1b2", set(vec![token("digit", r"\d"), token("alpha", r"[a-z]")]))
            .process()
            .unwrap();
        let begins: Vec<usize> = nodes.iter().map(|n| n.range().begin).collect();
        assert_eq!(begins, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_offset_and_parent_are_applied() {
        let parent = ParentRef {
            kind: NodeKind::Paragraph,
            range: Range::new(10, 13),
            depth: 2,
        };
        let nodes = Lexer::new("xyz", set(vec![token("char", r".")]))
            .offset(10)
            .parent(parent.clone())
            .process()
            .unwrap();
        assert_eq!(nodes[1].range(), Range::new(11, 12));
        assert_eq!(nodes[1].parent(), Some(&parent));
        assert_eq!(nodes[1].depth(), 3);
        assert_eq!(nodes[1].groups().get(0).unwrap().range, Range::new(11, 12));
    }

    #[test]
    fn test_zero_width_matches_are_ignored() {
        let nodes = Lexer::new("ab", set(vec![token("empty", r"x*"), token("char", r".")]))
            .process()
            .unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| n.kind() == &NodeKind::Custom("char".into())));
    }

    #[test]
    fn test_single_returns_first_node() {
        let first = Lexer::single("abc", token("char", r".")).unwrap().unwrap();
        let all = Lexer::new("abc", set(vec![token("char", r".")]))
            .process()
            .unwrap();
        assert_eq!(first, all[0]);
        assert_eq!(Lexer::single("", token("char", r".")).unwrap(), None);
    }

    #[derive(Debug)]
    struct Failing(regex::Regex);

    impl TokenDefinition for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn pattern(&self) -> &regex::Regex {
            &self.0
        }

        fn build(&self, matched: TokenMatch<'_>) -> Result<Node, BuildError> {
            Err(BuildError::new("failing", matched.range, "refused"))
        }
    }

    #[test]
    fn test_build_errors_propagate_untranslated() {
        let failing: Arc<dyn TokenDefinition> = Arc::new(Failing(regex::Regex::new("b").unwrap()));
        let err = Lexer::new("abc", set(vec![token("a", "a"), failing]))
            .process()
            .unwrap_err();
        let expected = BuildError::new("failing", Range::new(1, 2), "refused");
        assert_eq!(err.to_string(), expected.to_string());
        assert_eq!(err, LexerError::Build(expected));
    }

    fn looping() -> TokenSet {
        vec![Token::from_pattern(NodeKind::Custom("loop".into()), r"(?s).+")
            .unwrap()
            .nested(looping)
            .shared()]
        .into()
    }

    #[test]
    fn test_self_reproducing_grammar_hits_depth_limit() {
        let err = Lexer::new("abc", looping())
            .options(LexerOptions { max_depth: 5 })
            .process()
            .unwrap_err();
        match err {
            LexerError::DepthExceeded {
                depth, max_depth, ..
            } => {
                assert_eq!(depth, 6);
                assert_eq!(max_depth, 5);
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
