//! Configuration types and options for the application.
//!
//! This module contains the scanning options used by the analyzer and the
//! persistent configuration file that provides their defaults.

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::{DEFAULT_MAX_DEPTH, ScanOptions};
