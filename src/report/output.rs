//! Rendering of an [`AnalysisResult`].
//!
//! Two formats are supported: pretty-printed JSON for machine consumption and
//! a coloured text summary for humans.

use std::fmt::{Display, Formatter, Result as FmtResult};

use anyhow::Result;
use colored::Colorize;

use super::AnalysisResult;

/// Number of directory entries shown in the text summary.
pub const TREE_PREVIEW_LEN: usize = 15;

const RULE_WIDTH: usize = 60;

/// Serialize the full result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

impl Display for AnalysisResult {
    /// Format the human-readable summary.
    ///
    /// Empty UI-framework and routing sections are omitted, and only the first
    /// [`TREE_PREVIEW_LEN`] directory entries are listed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{}", "CODEBASE ANALYSIS REPORT".bold())?;
        writeln!(f, "{rule}\n")?;

        writeln!(f, "{} {}", "Path:".bold(), self.path.display())?;
        writeln!(
            f,
            "{} {}",
            "Stack Type:".bold(),
            self.stack_type.as_str().cyan()
        )?;
        writeln!(f, "{} {}\n", "Language:".bold(), self.language.as_str().cyan())?;

        writeln!(f, "{}", "Frameworks Detected:".bold())?;
        for framework in &self.frameworks {
            writeln!(f, "  - {}", framework.green())?;
        }
        writeln!(f)?;

        if !self.ui_frameworks.is_empty() {
            writeln!(f, "{}", "UI/CSS Frameworks:".bold())?;
            for framework in &self.ui_frameworks {
                writeln!(f, "  - {}", framework.green())?;
            }
            writeln!(f)?;
        }

        if let Some(kind) = self.routing.kind {
            writeln!(f, "{} {}", "Routing:".bold(), kind.yellow())?;
            for path in &self.routing.paths {
                writeln!(f, "  - {path}")?;
            }
            writeln!(f)?;
        }

        let files = &self.suggested_preset_files;
        writeln!(f, "{}", "Suggested Preset Files:".bold())?;
        writeln!(f, "  Required: {}", files.required.join(", "))?;
        writeln!(f, "  Optional: {}\n", files.optional.join(", "))?;

        writeln!(f, "{}", "Directory Structure (top directories):".bold())?;
        for dir in self.directory_tree.iter().take(TREE_PREVIEW_LEN) {
            writeln!(f, "  {dir}/")?;
        }
        if self.directory_tree.len() > TREE_PREVIEW_LEN {
            let more = format!(
                "... and {} more",
                self.directory_tree.len() - TREE_PREVIEW_LEN
            );
            writeln!(f, "  {}", more.dimmed())?;
        }

        write!(f, "\n{rule}")
    }
}

/// Print the result to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(result)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
