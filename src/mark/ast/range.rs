//! Ranges and source positions
//!
//! ## Types
//!
//! - [`Range`] - A half-open `[begin, end)` byte span into the root text
//! - [`Position`] - A line:column position in source text
//! - [`SourceLocation`] - Utility for converting byte offsets to positions
//!
//! ## Key Design
//!
//! - **Absolute offsets**: every range is relative to the root text, never to the slice a
//!   nested lexer happens to be working on
//! - **Anchor**: `begin` is the canonical point used by the lexer's claim check
//! - **Ordering**: ranges order by `begin`, then `end`, which is the order nodes are returned in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// A half-open byte span `[begin, end)` into the root text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Range {
    pub begin: usize,
    pub end: usize,
}

impl Range {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "range begin {} past end {}", begin, end);
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Check if an index falls inside this range
    pub fn contains(&self, index: usize) -> bool {
        self.begin <= index && index < self.end
    }

    /// Check if another range lies entirely inside this one
    pub fn encloses(&self, other: &Range) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Shift both ends by `offset`, turning a local range into an absolute one
    pub fn shifted(&self, offset: usize) -> Range {
        Range::new(self.begin + offset, self.end + offset)
    }

    pub fn span(&self) -> ByteRange<usize> {
        self.begin..self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// Represents a position in source text (line and column, both zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line, byte_offset - self.line_starts[line])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
