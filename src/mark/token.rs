//! Token definitions
//!
//!     A token definition pairs a pattern with a node constructor. The lexer only ever calls
//!     [TokenDefinition::pattern] to scan unclaimed text and [TokenDefinition::build] to turn a
//!     match into a [Node]; everything else about a grammar rule is private to it.
//!
//!     Definitions are handed to the lexer as an ordered [TokenSet]. Order is priority: a
//!     definition only competes for text that no earlier definition claimed.
//!
//!     Most rules are the same shape (wrap the match into a node, maybe re-lex one capture
//!     group with some nested set), so [Token] implements that shape declaratively. Rules that
//!     need more than that implement the trait themselves.

mod kind;

pub use kind::NodeKind;

use crate::mark::ast::{Content, MatchGroups, Node, ParentRef, Range};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// An ordered, shareable list of token definitions
pub type TokenSet = Arc<[Arc<dyn TokenDefinition>]>;

/// Provider of the nested token set a node re-lexes its content with
///
/// Resolved lazily, when a node is built, so grammars can refer to themselves (a strong span
/// may contain another strong span) without building the set recursively.
pub type NestedTokens = fn() -> TokenSet;

/// The empty token set; nodes built with it are leaves
pub fn empty_tokens() -> TokenSet {
    Arc::from(Vec::<Arc<dyn TokenDefinition>>::new())
}

/// Everything a definition is given to build a node
#[derive(Debug)]
pub struct TokenMatch<'t> {
    /// The matched text
    pub text: &'t str,
    /// Absolute range of the match in the root text
    pub range: Range,
    pub groups: MatchGroups,
    pub parent: Option<&'t ParentRef>,
}

/// A grammar rule: a pattern plus a node constructor
pub trait TokenDefinition: Send + Sync + fmt::Debug {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    fn pattern(&self) -> &Regex;

    fn build(&self, matched: TokenMatch<'_>) -> Result<Node, BuildError>;
}

/// Error raised by a token definition while constructing a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub token: String,
    pub range: Range,
    pub message: String,
}

impl BuildError {
    pub fn new(token: impl Into<String>, range: Range, message: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            range,
            message: message.into(),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token '{}' failed to build node at {}: {}",
            self.token, self.range, self.message
        )
    }
}

impl std::error::Error for BuildError {}

/// Declarative token definition
///
/// Builds a node of `kind` for every match. If a content group is set, only that group is
/// re-lexed by the node; otherwise the whole match is. The nested set defaults to empty.
pub struct Token {
    kind: NodeKind,
    name: String,
    pattern: Regex,
    content_group: Option<&'static str>,
    nested: NestedTokens,
}

impl Token {
    pub fn new(kind: NodeKind, pattern: Regex) -> Self {
        Self {
            name: kind.to_string(),
            kind,
            pattern,
            content_group: None,
            nested: empty_tokens,
        }
    }

    /// Compile `pattern` and build a token from it
    pub fn from_pattern(kind: NodeKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(kind, Regex::new(pattern)?))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Re-lex only the named capture group instead of the whole match
    pub fn content(mut self, group: &'static str) -> Self {
        self.content_group = Some(group);
        self
    }

    pub fn nested(mut self, provider: NestedTokens) -> Self {
        self.nested = provider;
        self
    }

    /// Wrap into a shareable definition
    pub fn shared(self) -> Arc<dyn TokenDefinition> {
        Arc::new(self)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("content_group", &self.content_group)
            .finish()
    }
}

impl TokenDefinition for Token {
    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn build(&self, matched: TokenMatch<'_>) -> Result<Node, BuildError> {
        let content = match self.content_group {
            Some(group_name) => {
                let group = matched.groups.name(group_name).ok_or_else(|| {
                    BuildError::new(
                        &self.name,
                        matched.range,
                        format!("content group '{}' did not participate", group_name),
                    )
                })?;
                Content::new(group.text.clone(), group.range.begin)
            }
            None => Content::new(matched.text, matched.range.begin),
        };

        let nested = (self.nested)();
        Ok(Node::from_match(self.kind.clone(), matched)
            .with_content(content)
            .with_nested(nested))
    }
}
