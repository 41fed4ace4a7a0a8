//! Whole-document entry point
//!
//!     The parser has no algorithm of its own: it runs a lexer over the full text with a
//!     single "whole document" definition and returns the one node that produces. All the
//!     structure comes from that definition's nested sets, which by default are the
//!     [reference grammar](crate::mark::grammar).

use crate::mark::ast::Node;
use crate::mark::grammar;
use crate::mark::lexing::{Lexer, LexerError, LexerOptions};
use crate::mark::token::{TokenDefinition, TokenSet};
use std::sync::Arc;
use tracing::debug;

pub struct Parser<'a> {
    text: &'a str,
    root: Arc<dyn TokenDefinition>,
    options: LexerOptions,
}

impl<'a> Parser<'a> {
    /// Parser using the reference grammar
    pub fn new(text: &'a str) -> Self {
        Self::with_grammar(text, grammar::document_token())
    }

    /// Parser using a caller-supplied whole-document definition
    pub fn with_grammar(text: &'a str, root: Arc<dyn TokenDefinition>) -> Self {
        Self {
            text,
            root,
            options: LexerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LexerOptions) -> Self {
        self.options = options;
        self
    }

    /// The document tree, or `None` for empty input
    pub fn tree(&self) -> Result<Option<Node>, LexerError> {
        debug!(bytes = self.text.len(), root = self.root.name(), "parsing document");
        let tokens: TokenSet = vec![Arc::clone(&self.root)].into();
        let nodes = Lexer::new(self.text, tokens)
            .options(self.options.clone())
            .process()?;
        Ok(nodes.into_iter().next())
    }
}

/// Parse `text` with the reference grammar
pub fn parse_document(text: &str) -> Result<Option<Node>, LexerError> {
    Parser::new(text).tree()
}
