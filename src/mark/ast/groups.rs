//! Capture groups of a token match
//!
//!     Token definitions receive the groups of the regex match that triggered them. Groups are
//!     copied out of the borrowed `regex::Captures` so nodes own them, and their ranges are
//!     translated to absolute offsets just like the match itself.

use super::range::Range;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// A single participating capture group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub text: String,
    pub range: Range,
}

/// Positional and named capture groups of one match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchGroups {
    /// Index 0 is the whole match; non-participating groups are `None`
    positional: Vec<Option<Group>>,
    names: BTreeMap<String, usize>,
}

impl MatchGroups {
    /// Copy the groups out of `captures`, shifting every range by `offset`
    pub fn from_captures(captures: &Captures<'_>, pattern: &Regex, offset: usize) -> Self {
        let positional = captures
            .iter()
            .map(|group| {
                group.map(|m| Group {
                    text: m.as_str().to_string(),
                    range: Range::new(m.start(), m.end()).shifted(offset),
                })
            })
            .collect();

        let names = pattern
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| name.map(|name| (name.to_string(), index)))
            .collect();

        Self { positional, names }
    }

    /// Groups for a match that has no sub-groups
    pub fn whole(text: &str, range: Range) -> Self {
        Self {
            positional: vec![Some(Group {
                text: text.to_string(),
                range,
            })],
            names: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Group> {
        self.positional.get(index).and_then(|g| g.as_ref())
    }

    pub fn name(&self, name: &str) -> Option<&Group> {
        self.names.get(name).and_then(|&index| self.get(index))
    }

    /// Text of a named group, if it participated in the match
    pub fn text(&self, name: &str) -> Option<&str> {
        self.name(name).map(|g| g.text.as_str())
    }

    /// Participating named groups, in name order
    pub fn named(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.names
            .iter()
            .filter_map(|(name, &index)| self.get(index).map(|g| (name.as_str(), g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_shifted_to_absolute_offsets() {
        let pattern = Regex::new(r"\[(?P<content>[^\]]+)\]\((?P<url>[^)]+)\)").unwrap();
        let captures = pattern.captures("[docs](http://x)").unwrap();
        let groups = MatchGroups::from_captures(&captures, &pattern, 100);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.get(0).unwrap().range, Range::new(100, 116));
        assert_eq!(groups.text("content"), Some("docs"));
        assert_eq!(groups.name("content").unwrap().range, Range::new(101, 105));
        assert_eq!(groups.text("url"), Some("http://x"));
    }

    #[test]
    fn test_non_participating_groups_are_absent() {
        let pattern = Regex::new(r"(?P<a>x)|(?P<b>y)").unwrap();
        let captures = pattern.captures("y").unwrap();
        let groups = MatchGroups::from_captures(&captures, &pattern, 0);

        assert!(groups.name("a").is_none());
        assert_eq!(groups.text("b"), Some("y"));
        let named: Vec<&str> = groups.named().map(|(name, _)| name).collect();
        assert_eq!(named, vec!["b"]);
    }
}
