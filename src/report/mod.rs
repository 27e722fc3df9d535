//! Report assembly and presentation.
//!
//! [`Analyzer`] runs the whole pipeline against a project root and assembles
//! an [`AnalysisResult`]; [`output`] renders it either as JSON or as a
//! human-readable summary.

pub mod output;
pub mod suggested;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Serialize;

pub use suggested::SuggestedFiles;

use crate::{
    config::ScanOptions,
    detection::{
        DetectionContext, Language, RoutingDescriptor, StackInputs, StackType, classify_stack,
        detect_frameworks, detect_language, detect_routing, detect_ui_frameworks,
    },
    diagnostics::Diagnostics,
    manifest::{ComposerManifest, Manifests, PackageManifest},
    scanner::Scanner,
};

/// Everything known about an analyzed project.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Absolute path of the analyzed root
    pub path: PathBuf,
    pub stack_type: StackType,
    pub language: Language,
    pub frameworks: Vec<&'static str>,
    pub ui_frameworks: Vec<&'static str>,
    pub routing: RoutingDescriptor,
    pub package_json: PackageManifest,
    pub composer_json: ComposerManifest,
    /// Relative subdirectory paths, sorted
    pub directory_tree: Vec<String>,
    pub suggested_preset_files: SuggestedFiles,
}

/// Runs every detector against a project root.
pub struct Analyzer {
    scanner: Scanner,
}

impl Analyzer {
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scanner: Scanner::new(scan_options),
        }
    }

    /// Analyze the project at `root`.
    ///
    /// Non-fatal problems (unreadable manifests, unreadable directories) are
    /// absorbed and recorded in `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist or cannot be resolved to an
    /// absolute path.
    pub fn analyze(&self, root: &Path, diagnostics: &mut Diagnostics) -> Result<AnalysisResult> {
        if !root.exists() {
            bail!("Path does not exist: {}", root.display());
        }

        let root = root.canonicalize()?;

        let manifests = Manifests::read(&root, diagnostics);
        let ctx = DetectionContext::new(&root, &manifests);

        let frameworks = detect_frameworks(&ctx);
        let ui_frameworks = detect_ui_frameworks(&ctx);
        let routing = detect_routing(&root, &frameworks, &self.scanner, diagnostics);
        let stack_type = classify_stack(&StackInputs {
            root: &root,
            frameworks: &frameworks,
            package: &manifests.package,
        });
        let language = detect_language(&root, &manifests);
        let directory_tree = self.scanner.directory_tree(&root, diagnostics);

        let Manifests { package, composer } = manifests;

        Ok(AnalysisResult {
            path: root,
            stack_type,
            language,
            frameworks,
            ui_frameworks,
            routing,
            package_json: package,
            composer_json: composer,
            directory_tree,
            suggested_preset_files: SuggestedFiles::for_stack(stack_type),
        })
    }
}
