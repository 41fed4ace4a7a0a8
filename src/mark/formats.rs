//! Output formats for node trees
//!
//! This module contains the inspection formats a tree can be serialized to:
//! - treeviz: one line per node, for eyeballing structure
//! - json / yaml: the full [Snapshot](crate::mark::ast::Snapshot), for tooling
//!
//! These are debugging and tooling views of the tree, not renderers.

pub mod registry;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter, JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter, TreevizOptions};
