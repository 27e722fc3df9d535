//! # stackscan
//!
//! A fast CLI tool that inspects a project directory and classifies it for
//! rule-preset generation.
//!
//! The report lists the detected frameworks, UI/CSS toolkits, routing
//! convention, primary language and stack type, together with the preset files
//! suggested for that stack type and an overview of the directory structure.
//!
//! ## Features
//!
//! - Framework detection from marker files and manifest dependencies
//!   (`package.json`, `composer.json`)
//! - UI toolkit and routing convention detection
//! - Single stack-type classification with a fixed rule priority
//! - JSON output for downstream tooling
//! - Persistent configuration via `~/.config/stackscan/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the current directory
//! stackscan
//!
//! # Machine-readable output with a deeper directory listing
//! stackscan ./my-app --json --depth 4
//! ```

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use stackscan::{
    cli::Cli,
    config::FileConfig,
    diagnostics::Diagnostics,
    report::{Analyzer, output::print_result},
};
use std::process::exit;

/// Entry point for the stackscan application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Analyzes the target directory
/// 4. Prints the report as JSON or text
/// 5. Reports absorbed errors on stderr in verbose mode
///
/// # Errors
///
/// This function can return errors from:
/// - A missing target directory
/// - Resolving the target directory to an absolute path
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = FileConfig::load().unwrap_or_else(|e| {
        if !args.json(&FileConfig::default()) {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        }
        FileConfig::default()
    });

    let dir = args.directory(&file_config);
    let json_mode = args.json(&file_config);
    let scan_options = args.scan_options(&file_config);

    let mut diagnostics = Diagnostics::new(scan_options.verbose);
    let analysis = Analyzer::new(scan_options).analyze(&dir, &mut diagnostics)?;

    print_result(&analysis, json_mode)?;
    diagnostics.print();

    Ok(())
}
