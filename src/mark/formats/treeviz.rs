//! Treeviz formatter for node trees
//!
//! Treeviz is a one line per node view of a tree, which enables quick scanning of how a text
//! was partitioned. Nesting is drawn with box connectors, two columns per level.
//!
//! So the format is:
//! <connectors><icon> <kind> <range> "<label>"
//!
//! where the label is the node's text with control characters escaped, truncated to the
//! configured width.
//!
//! Example:
//!
//!   ⧉ document 0..21 "# Title\n\nSome *text*."
//!   ├─ § heading 0..8 "# Title\n"
//!   │ └─ ◦ text 2..7 "Title"
//!   ├─ ↵ blank_line 8..9 "\n"
//!   └─ ¶ paragraph 9..21 "Some *text*."
//!     ├─ ◦ text 9..14 "Some "
//!     ├─ 𝐼 emphasis 14..20 "*text*"
//!     │ └─ ◦ text 15..19 "text"
//!     └─ ◦ text 20..21 "."
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Heading: §
//!         FencedCode: 𝒱
//!         ThematicBreak: ―
//!         Blockquote: ❝
//!         ListItem: •
//!         BlankLine: ↵
//!         Paragraph: ¶
//!     Inlines:
//!         Code: ƒ
//!         Image: ▣
//!         Link: ⊕
//!         Autolink: @
//!         Strong: 𝐁
//!         Strikethrough: ≁
//!         Emphasis: 𝐼
//!         Text: ◦
//!     Anything else: ○

use super::registry::{FormatError, Formatter};
use crate::mark::ast::{Snapshot, SourceLocation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Prefix each line with the 1-based line its node starts on
    pub show_line_numbers: bool,
    pub label_width: usize,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            label_width: 30,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(text: &str, width: usize) -> String {
    let escaped: String = text.chars().flat_map(char::escape_debug).collect();
    format!("\"{}\"", truncate(&escaped, width))
}

/// Get the icon for a node kind
fn get_icon(kind: &str) -> &'static str {
    match kind {
        "document" => "⧉",
        "heading" => "§",
        "fenced_code" => "𝒱",
        "thematic_break" => "―",
        "blockquote" => "❝",
        "list_item" => "•",
        "blank_line" => "↵",
        "paragraph" => "¶",
        "code" => "ƒ",
        "image" => "▣",
        "link" => "⊕",
        "autolink" => "@",
        "strong" => "𝐁",
        "strikethrough" => "≁",
        "emphasis" => "𝐼",
        "text" => "◦",
        _ => "○",
    }
}

struct Renderer<'a> {
    options: &'a TreevizOptions,
    location: SourceLocation,
    /// Absolute offset of the snapshot root; snapshot text starts there
    base: usize,
}

impl Renderer<'_> {
    fn line(&self, snapshot: &Snapshot, prefix: &str) -> String {
        let linum = if self.options.show_line_numbers {
            let position = self
                .location
                .byte_to_position(snapshot.range.begin - self.base);
            format!("{:02} ", position.line + 1)
        } else {
            String::new()
        };

        format!(
            "{}{}{} {} {} {}\n",
            linum,
            prefix,
            get_icon(&snapshot.kind),
            snapshot.kind,
            snapshot.range,
            label(&snapshot.text, self.options.label_width)
        )
    }

    fn children(&self, snapshot: &Snapshot, indent: &str, output: &mut String) {
        let count = snapshot.children.len();
        for (i, child) in snapshot.children.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└─ " } else { "├─ " };
            output.push_str(&self.line(child, &format!("{}{}", indent, connector)));

            let child_indent = format!("{}{}", indent, if is_last { "  " } else { "│ " });
            self.children(child, &child_indent, output);
        }
    }
}

/// Render a snapshot as treeviz
pub fn to_treeviz_str(snapshot: &Snapshot, options: &TreevizOptions) -> String {
    let renderer = Renderer {
        options,
        location: SourceLocation::new(&snapshot.text),
        base: snapshot.range.begin,
    };

    let mut output = renderer.line(snapshot, "");
    renderer.children(snapshot, "", &mut output);
    output
}

#[derive(Default)]
pub struct TreevizFormatter {
    options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Snapshot) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree, &self.options))
    }

    fn description(&self) -> &str {
        "One line per node, nesting drawn with box connectors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::ast::snapshot_from_node;
    use crate::mark::parsing::parse_document;

    fn treeviz(text: &str, options: TreevizOptions) -> String {
        let root = parse_document(text).unwrap().unwrap();
        to_treeviz_str(&snapshot_from_node(&root), &options)
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_label_escapes_newlines() {
        assert_eq!(label("a\nb", 30), "\"a\\nb\"");
    }

    #[test]
    fn test_icons() {
        assert_eq!(get_icon("paragraph"), "¶");
        assert_eq!(get_icon("codeowners"), "○");
    }

    #[test]
    fn test_simple_tree() {
        let output = treeviz("Hi *you*", TreevizOptions::default());
        let expected = [
            "⧉ document 0..8 \"Hi *you*\"",
            "└─ ¶ paragraph 0..8 \"Hi *you*\"",
            "  ├─ ◦ text 0..3 \"Hi \"",
            "  └─ 𝐼 emphasis 3..8 \"*you*\"",
            "    └─ ◦ text 4..7 \"you\"",
        ]
        .join("\n")
            + "\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_line_numbers() {
        let options = TreevizOptions {
            show_line_numbers: true,
            ..TreevizOptions::default()
        };
        let output = treeviz("a\n\nb", options);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("01 ⧉"));
        assert!(lines[2].starts_with("01 │ └─ ◦ text"));
        assert!(lines[3].starts_with("02 ├─ ↵"));
        assert!(lines[4].starts_with("03 └─ ¶"));
    }

    #[test]
    fn test_label_width() {
        let options = TreevizOptions {
            label_width: 4,
            ..TreevizOptions::default()
        };
        let output = treeviz("abcdefgh", options);
        assert!(output.starts_with("⧉ document 0..8 \"abcd...\"\n"));
    }
}
