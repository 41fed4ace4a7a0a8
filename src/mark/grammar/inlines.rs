//! Inline definitions
//!
//! # Parse Order
//!
//! 1. code - literal, so markup inside backticks is never claimed by anything else
//! 2. image - before link, since `![alt](url)` contains a link-shaped suffix
//! 3. link - the link text is re-lexed, so emphasis inside links works
//! 4. autolink - `<https://...>`
//! 5. strong / strong_underscore - before emphasis, whose markers are a prefix of strong's
//! 6. strikethrough
//! 7. emphasis / emphasis_underscore
//! 8. text - catch-all
//!
//! Underscore variants require a word boundary outside the markers, so identifiers such as
//! `snake_case_name` stay plain text.

use super::{inline_tokens, text_token};
use crate::mark::token::{NodeKind, Token, TokenSet};
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static INLINE_TOKENS: Lazy<TokenSet> = Lazy::new(|| {
    vec![
        Token::new(NodeKind::Code, Regex::new(r"`(?P<content>[^`\n]+)`").unwrap()).shared(),
        Token::new(
            NodeKind::Image,
            Regex::new(r"!\[(?P<alt>[^\]\n]*)\]\((?P<url>[^)\s]+)\)").unwrap(),
        )
        .shared(),
        Token::new(
            NodeKind::Link,
            Regex::new(r"\[(?P<content>[^\]\n]+)\]\((?P<url>[^)\s]+)\)").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::Autolink,
            Regex::new(r"<(?P<url>https?://[^>\s]+)>").unwrap(),
        )
        .shared(),
        Token::new(
            NodeKind::Strong,
            Regex::new(r"\*\*(?P<content>[^\n]+?)\*\*").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::Strong,
            Regex::new(r"\b__(?P<content>[^\n]+?)__\b").unwrap(),
        )
        .named("strong_underscore")
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::Strikethrough,
            Regex::new(r"~~(?P<content>[^\n]+?)~~").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::Emphasis,
            Regex::new(r"\*(?P<content>[^*\n]+)\*").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::Emphasis,
            Regex::new(r"\b_(?P<content>[^_\n]+)_\b").unwrap(),
        )
        .named("emphasis_underscore")
        .content("content")
        .nested(inline_tokens)
        .shared(),
        text_token(),
    ]
    .into()
});
