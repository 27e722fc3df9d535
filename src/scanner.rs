//! Directory traversal for the analyzed project.
//!
//! This module walks the project tree to produce the depth-bounded listing of
//! subdirectories shown in the report, and to locate files by name suffix for
//! routing detection. Dependency caches, build output, VCS metadata, editor
//! state and hidden directories are pruned together with everything below
//! them.

use std::path::{Component, Path};

use walkdir::{DirEntry, WalkDir};

use crate::{config::ScanOptions, diagnostics::Diagnostics};

/// Directory names that are never listed nor descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "__pycache__",
    "venv",
    ".venv",
    ".idea",
    ".vscode",
    "coverage",
    ".cache",
    ".turbo",
    ".output",
    "target",
    ".gradle",
    "Pods",
    ".dart_tool",
    ".pub-cache",
];

/// Directory walker for the analyzed project.
///
/// The `Scanner` applies the same pruning rules to both of its walks, so a
/// directory hidden from the tree listing is never searched for route files
/// either.
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// List every subdirectory of `root` up to the configured depth.
    ///
    /// Paths are relative to `root`, use `/` as separator and are sorted
    /// lexicographically. The root itself is never part of the listing, and a
    /// depth of `0` yields an empty list.
    ///
    /// Entries that cannot be read are skipped and reported to `diagnostics`.
    pub fn directory_tree(&self, root: &Path, diagnostics: &mut Diagnostics) -> Vec<String> {
        // walkdir raises max_depth to min_depth, so depth 0 has to be handled here
        if self.scan_options.max_depth == 0 {
            return Vec::new();
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(self.scan_options.max_depth)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| self.should_scan_entry(entry));

        let mut dirs = Vec::new();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir()
                        && let Some(relative) = Self::relative_path(root, entry.path())
                    {
                        dirs.push(relative);
                    }
                }
                Err(e) => diagnostics.record(format!("Error walking {}: {e}", root.display())),
            }
        }

        dirs.sort();
        dirs
    }

    /// Find files below `root` whose name ends with `suffix`.
    ///
    /// The walk is unbounded in depth but honours the same pruning rules as
    /// [`Scanner::directory_tree`]. Entries are visited in file-name order and
    /// the search stops once `limit` matches have been found.
    pub fn find_files_with_suffix(
        &self,
        root: &Path,
        suffix: &str,
        limit: usize,
        diagnostics: &mut Diagnostics,
    ) -> Vec<String> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.should_scan_entry(entry));

        let mut found = Vec::new();

        for entry in walker {
            if found.len() >= limit {
                break;
            }

            match entry {
                Ok(entry) => {
                    let matches = entry.file_type().is_file()
                        && entry
                            .file_name()
                            .to_str()
                            .is_some_and(|name| name.ends_with(suffix));

                    if matches && let Some(relative) = Self::relative_path(root, entry.path()) {
                        found.push(relative);
                    }
                }
                Err(e) => diagnostics.record(format!("Error walking {}: {e}", root.display())),
            }
        }

        found
    }

    /// Convert `path` into a `/`-separated path relative to `root`.
    fn relative_path(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    /// Determine if a directory entry should be visited.
    ///
    /// Files are always visited. Directories are pruned when their name is in
    /// the built-in block-list or the user-specified skip list, or when it
    /// starts with `.`. The walk root is exempt from these rules.
    fn should_scan_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let path = entry.path();

        !(self.is_path_in_skip_list(path)
            || Self::is_hidden_directory(path)
            || Self::is_excluded_directory(path))
    }

    /// Check if the directory name is in the user skip list
    fn is_path_in_skip_list(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.scan_options.skip.iter().any(|skip| skip == name))
    }

    /// Check if directory is hidden
    fn is_hidden_directory(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
    }

    /// Check if directory is in the excluded list
    fn is_excluded_directory(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
    }
}
