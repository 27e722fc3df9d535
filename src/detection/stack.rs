//! Stack-type classification.
//!
//! Rules are tested top to bottom and the first satisfied one decides. The
//! frontend/backend partition only applies once every specialised rule
//! (monorepo, mobile, desktop, docs, bot, cli) has failed.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    path::Path,
};

use serde::Serialize;

use super::frameworks::{
    ANGULAR, DISCORD_JS, DJANGO, DOCUSAURUS, ELECTRON, EXPRESS, FASTAPI, FASTIFY, FLASK, FLUTTER,
    HONO, LARAVEL, LERNA, MKDOCS, NESTJS, NEXT_JS, NUXT, NX, PNPM_WORKSPACE, REACT, REACT_NATIVE,
    SVELTE, SYMFONY, TAURI, TELEGRAF, TURBOREPO, VITEPRESS, VUE,
};
use crate::manifest::PackageManifest;

/// Coarse category summarising the shape of a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StackType {
    Frontend,
    Backend,
    Fullstack,
    Monorepo,
    Mobile,
    Desktop,
    Cli,
    Docs,
    Bot,
    #[default]
    Unknown,
}

impl StackType {
    /// Every variant, in declaration order.
    #[cfg(test)]
    pub(crate) const ALL: [Self; 10] = [
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::Monorepo,
        Self::Mobile,
        Self::Desktop,
        Self::Cli,
        Self::Docs,
        Self::Bot,
        Self::Unknown,
    ];

    /// Lowercase label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Monorepo => "monorepo",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Cli => "cli",
            Self::Docs => "docs",
            Self::Bot => "bot",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for StackType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

pub const MONOREPO_TOOLS: &[&str] = &[PNPM_WORKSPACE, TURBOREPO, NX, LERNA];
pub const MOBILE_FRAMEWORKS: &[&str] = &[FLUTTER, REACT_NATIVE];
pub const DESKTOP_FRAMEWORKS: &[&str] = &[TAURI, ELECTRON];
pub const DOCS_TOOLS: &[&str] = &[VITEPRESS, DOCUSAURUS, MKDOCS];
pub const BOT_LIBRARIES: &[&str] = &[DISCORD_JS, TELEGRAF];
pub const CLI_PARSERS: &[&str] = &["commander", "yargs", "meow", "cac", "clipanion"];
pub const FRONTEND_FRAMEWORKS: &[&str] = &[NEXT_JS, NUXT, REACT, VUE, ANGULAR, SVELTE];
pub const BACKEND_FRAMEWORKS: &[&str] = &[
    EXPRESS, NESTJS, HONO, FASTIFY, LARAVEL, SYMFONY, DJANGO, FASTAPI, FLASK,
];

/// Inputs the classification rules look at.
pub struct StackInputs<'a> {
    pub root: &'a Path,
    pub frameworks: &'a [&'a str],
    pub package: &'a PackageManifest,
}

impl StackInputs<'_> {
    fn has_any(&self, names: &[&str]) -> bool {
        self.frameworks.iter().any(|f| names.contains(f))
    }
}

type Rule = (fn(&StackInputs<'_>) -> bool, StackType);

static STACK_RULES: &[Rule] = &[
    (is_monorepo, StackType::Monorepo),
    (|i| i.has_any(MOBILE_FRAMEWORKS), StackType::Mobile),
    (|i| i.has_any(DESKTOP_FRAMEWORKS), StackType::Desktop),
    (|i| i.has_any(DOCS_TOOLS), StackType::Docs),
    (|i| i.has_any(BOT_LIBRARIES), StackType::Bot),
    (is_cli, StackType::Cli),
    (
        |i| i.has_any(FRONTEND_FRAMEWORKS) && i.has_any(BACKEND_FRAMEWORKS),
        StackType::Fullstack,
    ),
    (|i| i.has_any(FRONTEND_FRAMEWORKS), StackType::Frontend),
    (|i| i.has_any(BACKEND_FRAMEWORKS), StackType::Backend),
];

fn is_monorepo(inputs: &StackInputs<'_>) -> bool {
    inputs.has_any(MONOREPO_TOOLS) || !inputs.package.workspaces.is_empty()
}

fn is_cli(inputs: &StackInputs<'_>) -> bool {
    inputs.root.join("bin").is_dir()
        || CLI_PARSERS
            .iter()
            .any(|name| inputs.package.dependencies.contains(*name))
}

/// Classify a project into exactly one stack type.
#[must_use]
pub fn classify_stack(inputs: &StackInputs<'_>) -> StackType {
    STACK_RULES
        .iter()
        .find_map(|(matches, stack)| matches(inputs).then_some(*stack))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::frameworks::{FIBER, GIN};
    use std::fs;
    use tempfile::TempDir;

    fn classify(root: &Path, frameworks: &[&str], package: &PackageManifest) -> StackType {
        classify_stack(&StackInputs {
            root,
            frameworks,
            package,
        })
    }

    fn package(json: serde_json::Value) -> PackageManifest {
        PackageManifest::from_object(json.as_object().unwrap())
    }

    #[test]
    fn test_partition() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let empty = PackageManifest::default();

        assert_eq!(classify(root, &[], &empty), StackType::Unknown);
        assert_eq!(classify(root, &[REACT], &empty), StackType::Frontend);
        assert_eq!(classify(root, &[DJANGO], &empty), StackType::Backend);
        assert_eq!(
            classify(root, &[GIN, FIBER], &empty),
            StackType::Unknown
        );
        assert_eq!(classify(root, &[NEXT_JS, EXPRESS], &empty), StackType::Fullstack);
        assert_eq!(classify(root, &["tailwindcss"], &empty), StackType::Unknown);
    }

    #[test]
    fn test_monorepo_wins_over_everything() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("bin")).unwrap();

        let all = [PNPM_WORKSPACE, FLUTTER, TAURI, VITEPRESS, TELEGRAF, NEXT_JS, EXPRESS];
        assert_eq!(
            classify(root, &all, &PackageManifest::default()),
            StackType::Monorepo
        );

        let workspaces = package(serde_json::json!({ "workspaces": ["packages/*"] }));
        assert_eq!(classify(root, &[NESTJS], &workspaces), StackType::Monorepo);
    }

    #[test]
    fn test_priority_order_of_specialised_rules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let empty = PackageManifest::default();

        assert_eq!(classify(root, &[REACT_NATIVE, ELECTRON], &empty), StackType::Mobile);
        assert_eq!(classify(root, &[ELECTRON, DOCUSAURUS], &empty), StackType::Desktop);
        assert_eq!(classify(root, &[MKDOCS, DISCORD_JS], &empty), StackType::Docs);
        assert_eq!(classify(root, &[DISCORD_JS, EXPRESS], &empty), StackType::Bot);
    }

    #[test]
    fn test_documented_cli_classifies_as_docs() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("bin")).unwrap();

        assert_eq!(
            classify(temp_dir.path(), &[VITEPRESS], &PackageManifest::default()),
            StackType::Docs
        );
    }

    #[test]
    fn test_cli_by_bin_dir_or_runtime_dependency() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let commander = package(serde_json::json!({ "dependencies": { "commander": "^12" } }));
        assert_eq!(classify(root, &[REACT], &commander), StackType::Cli);

        let dev_only = package(serde_json::json!({ "devDependencies": { "yargs": "^17" } }));
        assert_eq!(classify(root, &[REACT], &dev_only), StackType::Frontend);

        fs::create_dir(root.join("bin")).unwrap();
        assert_eq!(
            classify(root, &[REACT], &PackageManifest::default()),
            StackType::Cli
        );
    }

    #[test]
    fn test_bin_file_is_not_cli() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bin"), "").unwrap();

        assert_eq!(
            classify(temp_dir.path(), &[], &PackageManifest::default()),
            StackType::Unknown
        );
    }

    #[test]
    fn test_stack_type_labels_match_serialization() {
        for stack in StackType::ALL {
            assert_eq!(
                serde_json::to_value(stack).unwrap(),
                serde_json::json!(stack.to_string())
            );
        }
    }
}
