//! Block definitions
//!
//! # Parse Order
//!
//! 1. fenced_code - tried first so nothing inside a fence is read as markup
//! 2. heading - `#` to `######`, a space, and a title
//! 3. thematic_break - before list_item, so `***` is not a list
//! 4. blockquote - one `>` line
//! 5. list_item - `-`, `*`, `+`, `1.` or `1)` followed by a space
//! 6. blank_line - whitespace-only line
//! 7. paragraph - a run of non-empty lines left over by everything above
//! 8. text - catch-all
//!
//! Every block ends at a newline (which it includes) or at the end of the text, so the
//! ranges left for later definitions always start at a line start and `(?m)^` holds.

use super::{inline_tokens, text_token};
use crate::mark::token::{NodeKind, Token, TokenSet};
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static BLOCK_TOKENS: Lazy<TokenSet> = Lazy::new(|| {
    vec![
        Token::new(
            NodeKind::FencedCode,
            Regex::new(r"(?m)^```(?P<info>[^`\n]*)\n(?P<code>(?s:.*?))^```[ \t]*(?:\n|\z)")
                .unwrap(),
        )
        .shared(),
        Token::new(
            NodeKind::Heading,
            Regex::new(r"(?m)^(?P<marker>#{1,6})[ \t]+(?P<content>[^\n]+?)[ \t]*(?:\n|\z)")
                .unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::ThematicBreak,
            Regex::new(r"(?m)^(?:-{3,}|\*{3,}|_{3,})[ \t]*(?:\n|\z)").unwrap(),
        )
        .shared(),
        Token::new(
            NodeKind::Blockquote,
            Regex::new(r"(?m)^>[ \t]?(?P<content>[^\n]*)(?:\n|\z)").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(
            NodeKind::ListItem,
            Regex::new(
                r"(?m)^(?P<indent>[ \t]*)(?P<marker>[-*+]|\d{1,9}[.)])[ \t]+(?P<content>[^\n]*)(?:\n|\z)",
            )
            .unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        Token::new(NodeKind::BlankLine, Regex::new(r"(?m)^[ \t]*\n").unwrap()).shared(),
        Token::new(
            NodeKind::Paragraph,
            Regex::new(r"(?m)^(?P<content>[^\n]+(?:\n[^\n]+)*)\n?").unwrap(),
        )
        .content("content")
        .nested(inline_tokens)
        .shared(),
        text_token(),
    ]
    .into()
});

#[cfg(test)]
mod tests {
    use super::super::block_tokens;
    use crate::mark::ast::{Node, Range};
    use crate::mark::lexing::Lexer;
    use crate::mark::token::NodeKind;

    fn blocks(text: &str) -> Vec<Node> {
        Lexer::new(text, block_tokens()).process().unwrap()
    }

    fn kinds(nodes: &[Node]) -> Vec<NodeKind> {
        nodes.iter().map(|n| n.kind().clone()).collect()
    }

    #[test]
    fn test_heading_captures_marker_and_title() {
        let nodes = blocks("## Title  \nbody");
        assert_eq!(kinds(&nodes), vec![NodeKind::Heading, NodeKind::Paragraph]);
        assert_eq!(nodes[0].group("marker"), Some("##"));
        assert_eq!(nodes[0].group("content"), Some("Title"));
        assert_eq!(nodes[0].range(), Range::new(0, 11));
    }

    #[test]
    fn test_fenced_code_is_literal() {
        let nodes = blocks("```rust\nlet x = **1**;\n```\nafter");
        assert_eq!(kinds(&nodes), vec![NodeKind::FencedCode, NodeKind::Paragraph]);
        assert_eq!(nodes[0].group("info"), Some("rust"));
        assert_eq!(nodes[0].group("code"), Some("let x = **1**;\n"));
        assert!(nodes[0].is_leaf());
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_paragraph() {
        let nodes = blocks("```\ncode");
        assert_eq!(kinds(&nodes), vec![NodeKind::Paragraph]);
    }

    #[test]
    fn test_thematic_break_wins_over_list_item() {
        let nodes = blocks("***\n- item\n");
        assert_eq!(kinds(&nodes), vec![NodeKind::ThematicBreak, NodeKind::ListItem]);
    }

    #[test]
    fn test_list_items_and_markers() {
        let nodes = blocks("- one\n  2) two\n");
        assert_eq!(kinds(&nodes), vec![NodeKind::ListItem, NodeKind::ListItem]);
        assert_eq!(nodes[0].group("marker"), Some("-"));
        assert_eq!(nodes[1].group("indent"), Some("  "));
        assert_eq!(nodes[1].group("marker"), Some("2)"));
        assert_eq!(nodes[1].group("content"), Some("two"));
    }

    #[test]
    fn test_paragraph_stops_at_claimed_lines() {
        let nodes = blocks("first\nsecond\n- item\nthird\n\nfourth");
        assert_eq!(
            kinds(&nodes),
            vec![
                NodeKind::Paragraph,
                NodeKind::ListItem,
                NodeKind::Paragraph,
                NodeKind::BlankLine,
                NodeKind::Paragraph,
            ]
        );
        assert_eq!(nodes[0].text(), "first\nsecond\n");
        assert_eq!(nodes[0].content().text, "first\nsecond");
    }

    #[test]
    fn test_blockquote_with_empty_content() {
        let nodes = blocks(">\n> quoted\n");
        assert_eq!(kinds(&nodes), vec![NodeKind::Blockquote, NodeKind::Blockquote]);
        assert!(nodes[0].is_leaf());
        assert_eq!(nodes[1].group("content"), Some("quoted"));
    }

    #[test]
    fn test_trailing_whitespace_line_is_a_paragraph() {
        let nodes = blocks("para\n\n   ");
        assert_eq!(
            kinds(&nodes),
            vec![NodeKind::Paragraph, NodeKind::BlankLine, NodeKind::Paragraph]
        );
    }
}
