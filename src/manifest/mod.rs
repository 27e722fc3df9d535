//! Manifest readers for the analyzed project.
//!
//! This module turns the package declarations found at the project root into
//! normalized records that the detectors can query by dependency name.
//!
//! ## Main Parts
//!
//! - [`PackageManifest`] - `package.json` (JS ecosystem)
//! - [`ComposerManifest`] - `composer.json` (PHP ecosystem)
//! - [`Manifests`] - all of the above, read in one go

pub mod package;

use std::path::Path;

pub use package::{ComposerManifest, PackageManifest};

use crate::diagnostics::Diagnostics;

/// Every manifest record read from a project root.
#[derive(Clone, Debug, Default)]
pub struct Manifests {
    pub package: PackageManifest,
    pub composer: ComposerManifest,
}

impl Manifests {
    /// Read all supported manifests at `root`, absorbing any failure.
    pub fn read(root: &Path, diagnostics: &mut Diagnostics) -> Self {
        Self {
            package: PackageManifest::read(root, diagnostics),
            composer: ComposerManifest::read(root, diagnostics),
        }
    }
}
