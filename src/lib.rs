//! # stackscan
//!
//! A fast CLI tool that inspects a project directory and classifies it: which
//! frameworks and UI toolkits it uses, which routing convention it follows and
//! what overall stack type it represents.
//!
//! This library provides the core functionality for the stackscan CLI tool:
//! walking the project tree, reading package manifests, running the detector
//! tables and assembling the final report.

pub mod cli;
pub mod config;
pub mod detection;
pub mod diagnostics;
pub mod manifest;
pub mod report;
pub mod scanner;
