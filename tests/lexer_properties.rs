//! Property-based tests for the lexer and the reference grammar
//!
//! Inputs are drawn from an alphabet heavy in markup characters, so most generated
//! documents contain partial, unbalanced or nested markup.

use mark_parser::mark::ast::Node;
use mark_parser::mark::grammar::{block_tokens, inline_tokens};
use mark_parser::mark::testing::{assert_partition, assert_well_formed};
use mark_parser::mark::{parse_document, Lexer, LexerError, NodeKind, Token, TokenSet};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    'a', 'b', 'x', ' ', ' ', '\n', '\n', '\t', '#', '*', '*', '_', '`', '>', '-', '+', '1', '.',
    ')', '[', ']', '(', ')', '!', '~', '<', 'h', 't', 'p', 's', ':', '/', 'é',
];

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..60)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Every node with a nested set must have its content tiled by its children
fn assert_content_tiled(node: &Node) {
    if !node.nested_tokens().is_empty() {
        assert_partition(node.children(), node.content().range());
    }
    node.children().iter().for_each(assert_content_tiled);
}

proptest! {
    #[test]
    fn reference_grammar_covers_any_input(text in markup()) {
        let tree = parse_document(&text).unwrap();
        match tree {
            None => prop_assert!(text.is_empty()),
            Some(root) => {
                prop_assert_eq!(root.kind(), &NodeKind::Document);
                prop_assert_eq!(root.text(), text.as_str());
                assert_content_tiled(&root);
            }
        }
    }

    #[test]
    fn trees_are_well_formed(text in markup()) {
        if let Some(root) = parse_document(&text).unwrap() {
            assert_well_formed(&root);
        }
    }

    #[test]
    fn sibling_anchors_are_unique_and_sorted(text in markup()) {
        let nodes = Lexer::new(&text, block_tokens()).process().unwrap();
        let anchors: Vec<usize> = nodes.iter().map(|n| n.range().begin).collect();
        prop_assert!(anchors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lexing_is_deterministic(text in markup()) {
        let first = Lexer::new(&text, inline_tokens()).process().unwrap();
        let second = Lexer::new(&text, inline_tokens()).process().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn leaves_reassemble_the_text(text in markup()) {
        let nodes = Lexer::new(&text, inline_tokens()).process().unwrap();
        let leaves: String = nodes.iter().map(Node::leaf_text).collect();
        // Leaves drop the markers around nested content, so they are a subsequence
        let mut rest = text.chars();
        prop_assert!(leaves.chars().all(|c| rest.any(|t| t == c)));
    }

    #[test]
    fn coverage_without_catch_all(text in "[abc]{0,24}") {
        let tokens: TokenSet = vec![
            Token::from_pattern(NodeKind::Custom("pair".into()), "ab").unwrap().shared(),
            Token::from_pattern(NodeKind::Custom("b".into()), "b").unwrap().shared(),
        ]
        .into();

        let covered = !text.contains('c') && !text.contains("aa") && !text.ends_with('a');
        match Lexer::new(&text, tokens).process() {
            Ok(nodes) => {
                prop_assert!(covered);
                let total: usize = nodes.iter().map(|n| n.range().len()).sum();
                prop_assert_eq!(total, text.len());
            }
            Err(LexerError::Unprocessed { ranges }) => {
                prop_assert!(!covered);
                prop_assert!(!ranges.is_empty());
                prop_assert!(ranges.iter().all(|r| !r.is_empty()));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
