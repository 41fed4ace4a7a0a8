//! Claimed span bookkeeping
//!
//!     Tracks which parts of a lexer's text have been claimed by nodes. Anchors are unique, so
//!     claimed spans live in one ordered map from anchor to end. Claiming and the anchor check
//!     are O(log N); the available-range walk is linear in the number of claims, and no
//!     per-index sets are ever materialized.
//!
//!     All ranges here are local to the lexer's text.

use crate::mark::ast::Range;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub(crate) struct Claims {
    len: usize,
    /// Claimed spans, keyed by anchor
    spans: BTreeMap<usize, usize>,
}

impl Claims {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub(crate) fn claim(&mut self, range: Range) {
        self.spans
            .entry(range.begin)
            .and_modify(|end| *end = (*end).max(range.end))
            .or_insert(range.end);
    }

    /// True when some claimed span's anchor lies inside `range`
    ///
    /// Only anchors are checked: a candidate that starts in unclaimed text and runs into the
    /// interior of an existing span without covering its anchor is not rejected.
    pub(crate) fn is_blocked(&self, range: &Range) -> bool {
        self.spans.range(range.begin..range.end).next().is_some()
    }

    /// Maximal contiguous unclaimed ranges, in order
    pub(crate) fn available(&self) -> Vec<Range> {
        let mut available = Vec::new();
        let mut cursor = 0;

        for (&begin, &end) in &self.spans {
            if begin > cursor {
                available.push(Range::new(cursor, begin));
            }
            cursor = cursor.max(end);
        }

        if cursor < self.len {
            available.push(Range::new(cursor, self.len));
        }

        available
    }
}
