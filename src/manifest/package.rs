//! JSON package manifests (`package.json` and `composer.json`).
//!
//! Both readers are tolerant: a missing, unreadable or malformed manifest
//! yields an empty record instead of an error. Only dependency *names* are
//! kept; version constraints are discarded.

use std::{collections::BTreeSet, fs, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;

/// Normalized view of a JS-ecosystem `package.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Declared package name, empty when absent
    pub name: String,

    /// Names declared under `dependencies`
    pub dependencies: BTreeSet<String>,

    /// Names declared under `devDependencies`
    pub dev_dependencies: BTreeSet<String>,

    /// Names declared under `scripts`
    pub scripts: BTreeSet<String>,

    /// Workspace globs, from either the array or the `{ "packages": [...] }` form
    pub workspaces: Vec<String>,

    #[serde(skip)]
    loaded: bool,
}

impl PackageManifest {
    /// File name looked up at the project root.
    pub const FILE_NAME: &'static str = "package.json";

    /// Read `package.json` from `root`.
    pub fn read(root: &Path, diagnostics: &mut Diagnostics) -> Self {
        read_json_object(&root.join(Self::FILE_NAME), diagnostics)
            .map(|object| Self::from_object(&object))
            .unwrap_or_default()
    }

    /// Build a manifest record from an already parsed JSON object.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            name: string_field(object, "name"),
            dependencies: key_set(object, "dependencies"),
            dev_dependencies: key_set(object, "devDependencies"),
            scripts: key_set(object, "scripts"),
            workspaces: workspace_globs(object.get("workspaces")),
            loaded: true,
        }
    }

    /// Whether a non-empty manifest was found and parsed.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Check runtime and development dependencies for an exact name.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name) || self.dev_dependencies.contains(name)
    }

    /// Iterate over runtime and development dependency names.
    pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .map(String::as_str)
    }
}

/// Normalized view of a PHP-ecosystem `composer.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComposerManifest {
    /// Declared package name, empty when absent
    pub name: String,

    /// Names declared under `require`
    pub require: BTreeSet<String>,

    /// Names declared under `require-dev`
    #[serde(rename = "require-dev")]
    pub require_dev: BTreeSet<String>,

    #[serde(skip)]
    loaded: bool,
}

impl ComposerManifest {
    /// File name looked up at the project root.
    pub const FILE_NAME: &'static str = "composer.json";

    /// Read `composer.json` from `root`.
    pub fn read(root: &Path, diagnostics: &mut Diagnostics) -> Self {
        read_json_object(&root.join(Self::FILE_NAME), diagnostics)
            .map(|object| Self::from_object(&object))
            .unwrap_or_default()
    }

    /// Build a manifest record from an already parsed JSON object.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            name: string_field(object, "name"),
            require: key_set(object, "require"),
            require_dev: key_set(object, "require-dev"),
            loaded: true,
        }
    }

    /// Whether a non-empty manifest was found and parsed.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Check `require` and `require-dev` for an exact name.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.require.contains(name) || self.require_dev.contains(name)
    }
}

/// Read `path` as a JSON object.
///
/// Returns `None` when the file is absent, unreadable, not valid JSON, not an
/// object, or an empty object. Read and parse failures are recorded.
fn read_json_object(path: &Path, diagnostics: &mut Diagnostics) -> Option<Map<String, Value>> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.record(format!("Error reading {}: {e}", path.display()));
            return None;
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(object)) if !object.is_empty() => Some(object),
        Ok(_) => None,
        Err(e) => {
            diagnostics.record(format!("Error parsing {}: {e}", path.display()));
            None
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn key_set(object: &Map<String, Value>, key: &str) -> BTreeSet<String> {
    object
        .get(key)
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

fn workspace_globs(value: Option<&Value>) -> Vec<String> {
    let globs = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Object(map)) => match map.get("packages") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    globs
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, name: &str, content: &str) {
        fs::write(root.join(name), content).unwrap();
    }

    fn quiet() -> Diagnostics {
        Diagnostics::new(false)
    }

    #[test]
    fn test_package_manifest_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = PackageManifest::read(temp_dir.path(), &mut quiet());

        assert_eq!(manifest, PackageManifest::default());
        assert!(!manifest.is_loaded());
        assert!(manifest.name.is_empty());
        assert!(manifest.workspaces.is_empty());
    }

    #[test]
    fn test_package_manifest_full() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "package.json",
            r#"{
  "name": "web",
  "scripts": { "dev": "next dev", "build": "next build" },
  "dependencies": { "next": "14.0.0", "react": "^18" },
  "devDependencies": { "typescript": "^5" },
  "workspaces": ["apps/*", "packages/*"]
}"#,
        );

        let manifest = PackageManifest::read(temp_dir.path(), &mut quiet());

        assert!(manifest.is_loaded());
        assert_eq!(manifest.name, "web");
        assert!(manifest.dependencies.contains("next"));
        assert!(manifest.dependencies.contains("react"));
        assert!(manifest.dev_dependencies.contains("typescript"));
        assert!(manifest.scripts.contains("dev"));
        assert!(manifest.scripts.contains("build"));
        assert_eq!(manifest.workspaces, vec!["apps/*", "packages/*"]);
        assert!(manifest.has_dependency("typescript"));
        assert!(!manifest.has_dependency("vue"));
        assert_eq!(manifest.all_dependencies().count(), 3);
    }

    #[test]
    fn test_package_manifest_yarn_workspaces_object() {
        let object = serde_json::json!({
            "name": "mono",
            "workspaces": { "packages": ["packages/*"], "nohoist": ["**/react-native"] }
        });
        let manifest = PackageManifest::from_object(object.as_object().unwrap());

        assert_eq!(manifest.workspaces, vec!["packages/*"]);
    }

    #[test]
    fn test_package_manifest_ignores_wrongly_typed_fields() {
        let object = serde_json::json!({
            "name": 42,
            "dependencies": ["react"],
            "workspaces": "packages/*"
        });
        let manifest = PackageManifest::from_object(object.as_object().unwrap());

        assert!(manifest.is_loaded());
        assert!(manifest.name.is_empty());
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.workspaces.is_empty());
    }

    #[test]
    fn test_package_manifest_malformed_is_empty_and_recorded() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "package.json", "{ \"name\": ");

        let mut diagnostics = Diagnostics::new(true);
        let manifest = PackageManifest::read(temp_dir.path(), &mut diagnostics);

        assert_eq!(manifest, PackageManifest::default());
        assert_eq!(diagnostics.messages().len(), 1);
        assert!(diagnostics.messages()[0].starts_with("Error parsing"));
    }

    #[test]
    fn test_empty_or_non_object_json_is_not_loaded() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "package.json", "{}");
        write(temp_dir.path(), "composer.json", "[1, 2]");

        assert!(!PackageManifest::read(temp_dir.path(), &mut quiet()).is_loaded());
        assert!(!ComposerManifest::read(temp_dir.path(), &mut quiet()).is_loaded());
    }

    #[test]
    fn test_composer_manifest() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "composer.json",
            r#"{
  "name": "acme/shop",
  "require": { "php": "^8.2", "laravel/framework": "^11.0" },
  "require-dev": { "phpunit/phpunit": "^11" }
}"#,
        );

        let manifest = ComposerManifest::read(temp_dir.path(), &mut quiet());

        assert!(manifest.is_loaded());
        assert_eq!(manifest.name, "acme/shop");
        assert!(manifest.has_dependency("laravel/framework"));
        assert!(manifest.has_dependency("phpunit/phpunit"));
        assert!(!manifest.has_dependency("symfony/framework-bundle"));
    }

    #[test]
    fn test_serialized_field_names() {
        let package = serde_json::to_value(PackageManifest::default()).unwrap();
        let composer = serde_json::to_value(ComposerManifest::default()).unwrap();

        assert_eq!(
            package,
            serde_json::json!({
                "name": "",
                "dependencies": [],
                "devDependencies": [],
                "scripts": [],
                "workspaces": []
            })
        );
        assert_eq!(
            composer,
            serde_json::json!({ "name": "", "require": [], "require-dev": [] })
        );
    }
}
