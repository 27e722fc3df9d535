//! Signature matching shared by the framework and UI detectors.
//!
//! A [`Signature`] is a named, ordered list of [`Clause`]s. Clauses are OR'd:
//! they are evaluated in order and the first one satisfied detects the
//! signature, skipping the rest.

use std::path::Path;

use crate::manifest::Manifests;

/// A single detection condition.
#[derive(Debug)]
pub enum Clause {
    /// Any of the paths exists under the root (file or directory)
    Files(&'static [&'static str]),

    /// Any of the paths is a directory under the root
    Dirs(&'static [&'static str]),

    /// Any exact name among `package.json` runtime and dev dependencies
    Deps(&'static [&'static str]),

    /// Any `package.json` dependency name starts with the prefix
    DepPrefix(&'static str),

    /// Any exact name among `composer.json` `require` and `require-dev`
    ComposerDeps(&'static [&'static str]),
}

/// Everything a clause may look at.
#[derive(Clone, Copy)]
pub struct DetectionContext<'a> {
    pub root: &'a Path,
    pub manifests: &'a Manifests,
}

impl<'a> DetectionContext<'a> {
    #[must_use]
    pub const fn new(root: &'a Path, manifests: &'a Manifests) -> Self {
        Self { root, manifests }
    }
}

impl Clause {
    /// Evaluate the clause against a project.
    #[must_use]
    pub fn matches(&self, ctx: &DetectionContext<'_>) -> bool {
        let package = &ctx.manifests.package;

        match self {
            Self::Files(paths) => paths.iter().any(|p| ctx.root.join(p).exists()),
            Self::Dirs(paths) => paths.iter().any(|p| ctx.root.join(p).is_dir()),
            Self::Deps(names) => names.iter().any(|name| package.has_dependency(name)),
            Self::DepPrefix(prefix) => package
                .all_dependencies()
                .any(|dep| dep.starts_with(*prefix)),
            Self::ComposerDeps(names) => names
                .iter()
                .any(|name| ctx.manifests.composer.has_dependency(name)),
        }
    }
}

/// A named detection rule.
#[derive(Debug)]
pub struct Signature {
    pub name: &'static str,
    pub clauses: &'static [Clause],
}

impl Signature {
    /// Whether any clause is satisfied, stopping at the first that is.
    #[must_use]
    pub fn matches(&self, ctx: &DetectionContext<'_>) -> bool {
        self.clauses.iter().any(|clause| clause.matches(ctx))
    }
}

/// Names of every signature in `table` that matches, in table order.
///
/// A name listed more than once in the table is reported only once.
#[must_use]
pub fn detect(table: &[Signature], ctx: &DetectionContext<'_>) -> Vec<&'static str> {
    let mut detected: Vec<&'static str> = Vec::new();

    for signature in table {
        if !detected.contains(&signature.name) && signature.matches(ctx) {
            detected.push(signature.name);
        }
    }

    detected
}
