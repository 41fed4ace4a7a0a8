//! # mark-parser
//!
//! A structural lexer and parser for markdown-flavored annotations.
//!
//! File Layout
//!
//!     The engine is split in two: the lexer, which knows nothing about any particular
//!     grammar, and the grammar, which is just an ordered list of token definitions. The
//!     lexer partitions text into spans using those definitions, and every span re-lexes
//!     its own content with its own nested definitions.
//!
//!     src/mark
//!       ├── ast        Ranges, match groups, nodes and snapshots
//!       ├── token      The token definition capability and node kinds
//!       ├── lexing     The claiming lexer
//!       ├── parsing    Whole-document entry point
//!       ├── grammar    The reference markdown-flavored grammar
//!       ├── formats    Inspection output (treeviz, json, yaml)
//!       ├── config     Layered configuration
//!       └── testing    Fluent tree assertions and sample documents
//!
//! For testing guidelines, see the [testing module](mark::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod mark;
