//! Curated sample documents
//!
//! Samples live under `samples/` at the crate root, one markdown file per topic. Tests
//! refer to them by stem: `Samples::source("lists")` reads `samples/lists.md`.
//!
//! Loading panics on a missing file, since a test that can't find its input is broken.

use crate::mark::ast::Node;
use crate::mark::parsing::parse_document;
use std::fs;
use std::path::PathBuf;

pub struct Samples;

impl Samples {
    /// Directory holding the sample files
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(format!("{}.md", name))
    }

    /// Stems of every available sample, sorted
    pub fn list() -> Vec<String> {
        let entries = fs::read_dir(Self::dir())
            .unwrap_or_else(|e| panic!("Cannot read {}: {}", Self::dir().display(), e));

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    pub fn source(name: &str) -> String {
        let path = Self::path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Cannot read sample {}: {}", path.display(), e))
    }

    /// Parse a sample with the reference grammar
    pub fn parse(name: &str) -> Node {
        let source = Self::source(name);
        match parse_document(&source) {
            Ok(Some(root)) => root,
            Ok(None) => panic!("Sample '{}' is empty", name),
            Err(e) => panic!("Sample '{}' failed to parse: {}", name, e),
        }
    }
}
