//! Syntax tree data types
//!
//!     The tree produced by the lexer is made of a single node type, [Node], tagged by a
//!     [NodeKind](crate::mark::token::NodeKind). Every node carries the absolute [Range] it
//!     covers in the root text, the capture groups of the match that produced it and the
//!     children discovered by re-lexing its content.
//!
//!     [Snapshot] is the normalized, serializable view of a tree that the inspection formats
//!     consume.

pub mod groups;
pub mod node;
pub mod range;
pub mod snapshot;

pub use groups::{Group, MatchGroups};
pub use node::{Content, Node, ParentRef};
pub use range::{Position, Range, SourceLocation};
pub use snapshot::{snapshot_from_node, Snapshot};
