//! Node kinds
//!
//!     The kinds produced by the reference grammar, plus `Custom` for grammars supplied from
//!     outside the crate. The lexer never looks at a kind; it only matters to consumers of the
//!     tree (formats, assertions, renderers).
//!
//!     Block kinds (one or more lines):
//!         - Document: the whole text
//!         - Heading: # title
//!         - FencedCode: ```info ... ``` (literal)
//!         - ThematicBreak: ---
//!         - Blockquote: > quoted
//!         - ListItem: - item, 1. item
//!         - BlankLine
//!         - Paragraph: a run of non-blank lines
//!
//!     Inline kinds:
//!         - Code: `code` (literal)
//!         - Image: ![alt](url)
//!         - Link: [text](url)
//!         - Autolink: <https://example.com>
//!         - Strong: **text** or __text__
//!         - Strikethrough: ~~text~~
//!         - Emphasis: *text* or _text_
//!         - Text: anything else

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Heading,
    FencedCode,
    ThematicBreak,
    Blockquote,
    ListItem,
    BlankLine,
    Paragraph,
    Code,
    Image,
    Link,
    Autolink,
    Strong,
    Strikethrough,
    Emphasis,
    Text,
    /// A kind defined by an external grammar
    Custom(String),
}

impl NodeKind {
    /// Literal kinds never carry nested structure
    pub fn is_literal(&self) -> bool {
        matches!(self, NodeKind::FencedCode | NodeKind::Code)
    }

    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Heading
                | NodeKind::FencedCode
                | NodeKind::ThematicBreak
                | NodeKind::Blockquote
                | NodeKind::ListItem
                | NodeKind::BlankLine
                | NodeKind::Paragraph
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Document => write!(f, "document"),
            NodeKind::Heading => write!(f, "heading"),
            NodeKind::FencedCode => write!(f, "fenced_code"),
            NodeKind::ThematicBreak => write!(f, "thematic_break"),
            NodeKind::Blockquote => write!(f, "blockquote"),
            NodeKind::ListItem => write!(f, "list_item"),
            NodeKind::BlankLine => write!(f, "blank_line"),
            NodeKind::Paragraph => write!(f, "paragraph"),
            NodeKind::Code => write!(f, "code"),
            NodeKind::Image => write!(f, "image"),
            NodeKind::Link => write!(f, "link"),
            NodeKind::Autolink => write!(f, "autolink"),
            NodeKind::Strong => write!(f, "strong"),
            NodeKind::Strikethrough => write!(f, "strikethrough"),
            NodeKind::Emphasis => write!(f, "emphasis"),
            NodeKind::Text => write!(f, "text"),
            NodeKind::Custom(name) => write!(f, "{}", name),
        }
    }
}
