//! Testing utilities for node trees
//!
//! # Parser Testing Guidelines
//!
//! Two tools are meant to be used together:
//!
//! 1. **[Samples]** - curated markdown documents under `samples/`
//! 2. **[assert_tree](fn@assert_tree)** - fluent verification of a whole tree
//!
//! ## Rule 1: Prefer Samples for Document Content
//!
//! Small inline strings are fine for unit tests of a single token. Anything that exercises
//! block structure should come from a sample file, so that when the grammar changes there
//! is one place to look.
//!
//! ```rust-example
//! use mark_parser::mark::testing::Samples;
//!
//! let root = Samples::parse("lists");
//! ```
//!
//! ## Rule 2: Assert Shape, not Counts
//!
//! A node count says little. Walk the tree and check kinds, ranges and texts:
//!
//! ```rust-example
//! use mark_parser::mark::testing::assert_tree;
//! use mark_parser::mark::NodeKind;
//!
//! assert_tree(&root)
//!     .kind(NodeKind::Document)
//!     .child(0, |heading| {
//!         heading
//!             .kind(NodeKind::Heading)
//!             .group("marker", "#")
//!             .leaf_text("Title");
//!     });
//! ```
//!
//! ## Structural Checks
//!
//! [assert_well_formed] checks the properties every processed tree must have regardless of
//! grammar: children are sorted, never overlap, lie inside their parent's content and, for
//! grammars with a catch-all, tile that content exactly. Property tests lean on it.

mod samples;
mod tree_assertions;

pub use samples::Samples;
pub use tree_assertions::{assert_partition, assert_tree, assert_well_formed, NodeAssertion};
