//! Primary programming language guess.

use std::{
    fmt::{Display, Formatter, Result},
    path::Path,
};

use serde::Serialize;

use crate::manifest::Manifests;

/// Primary language of the analyzed project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Language {
    TypeScript,
    JavaScript,
    #[serde(rename = "PHP")]
    Php,
    Go,
    Rust,
    Python,
    Dart,
    #[default]
    Unknown,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Php => "PHP",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Dart => "Dart",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

type Rule = (fn(&Path, &Manifests) -> bool, Language);

static LANGUAGE_RULES: &[Rule] = &[
    (
        |root, m| m.package.is_loaded() && root.join("tsconfig.json").exists(),
        Language::TypeScript,
    ),
    (|_, m| m.package.is_loaded(), Language::JavaScript),
    (|_, m| m.composer.is_loaded(), Language::Php),
    (|root, _| root.join("go.mod").exists(), Language::Go),
    (|root, _| root.join("Cargo.toml").exists(), Language::Rust),
    (
        |root, _| root.join("pyproject.toml").exists() || root.join("requirements.txt").exists(),
        Language::Python,
    ),
    (|root, _| root.join("pubspec.yaml").exists(), Language::Dart),
];

/// Guess the primary language; only the first matching rule applies.
#[must_use]
pub fn detect_language(root: &Path, manifests: &Manifests) -> Language {
    LANGUAGE_RULES
        .iter()
        .find_map(|(matches, language)| matches(root, manifests).then_some(*language))
        .unwrap_or_default()
}
