//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how deep the directory walker
//! descends and which extra directories it prunes.

/// Default maximum traversal depth below the analyzed root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Maximum number of path segments below the root that are listed
    pub max_depth: usize,

    /// Whether to print absorbed read and parse errors to stderr
    pub verbose: bool,

    /// Extra directory names to prune, on top of the built-in block-list
    pub skip: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: false,
            skip: Vec::new(),
        }
    }
}
