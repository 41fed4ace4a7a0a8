//! Reference grammar
//!
//!     A markdown-flavored grammar for the lexer, made of three token sets:
//!
//!         - document: a single definition matching the whole text, whose nested set is the
//!           block set. This is what [Parser](crate::mark::parsing::Parser) wraps.
//!         - blocks: line-oriented elements (headings, list items, fenced code, paragraphs).
//!         - inlines: span elements inside a line (code, links, strong, emphasis).
//!
//!     Every set ends with a catch-all `Text` definition, so any input is covered and the
//!     lexer never reports unprocessed text for this grammar.
//!
//!     Sets are built once, lazily, and shared. Definitions refer to the sets they nest
//!     through plain functions ([block_tokens], [inline_tokens]), which is what lets a strong
//!     span contain another strong span without the set having to contain itself.

mod blocks;
mod inlines;

use crate::mark::token::{NodeKind, Token, TokenDefinition, TokenSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static DOCUMENT: Lazy<Arc<dyn TokenDefinition>> = Lazy::new(|| {
    Token::new(NodeKind::Document, Regex::new(r"(?s).+").unwrap())
        .nested(block_tokens)
        .shared()
});

/// The whole-document definition
pub fn document_token() -> Arc<dyn TokenDefinition> {
    Arc::clone(&DOCUMENT)
}

/// Block definitions, in priority order
pub fn block_tokens() -> TokenSet {
    Arc::clone(&blocks::BLOCK_TOKENS)
}

/// Inline definitions, in priority order
pub fn inline_tokens() -> TokenSet {
    Arc::clone(&inlines::INLINE_TOKENS)
}

/// Look a definition up by name in a set
pub fn find_token(tokens: &TokenSet, name: &str) -> Option<Arc<dyn TokenDefinition>> {
    tokens.iter().find(|token| token.name() == name).cloned()
}

/// Catch-all definition that closes every set
fn text_token() -> Arc<dyn TokenDefinition> {
    Token::new(NodeKind::Text, Regex::new(r"(?s).+").unwrap()).shared()
}
