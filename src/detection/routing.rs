//! Routing-convention guess for the detected framework.
//!
//! Rules form a fixed priority chain. The first rule whose framework was
//! detected decides the descriptor, even when it finds no routing directory;
//! later rules are never consulted.

use std::path::Path;

use serde::Serialize;

use super::frameworks::{EXPRESS, HONO, LARAVEL, NESTJS, NEXT_JS, NUXT};
use crate::{diagnostics::Diagnostics, scanner::Scanner};

/// Maximum number of NestJS controllers listed.
pub const MAX_CONTROLLERS: usize = 5;

/// Best-guess routing layout of a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RoutingDescriptor {
    /// Convention label, `None` when no rule applied
    #[serde(rename = "type")]
    pub kind: Option<&'static str>,

    /// Representative route files or directories, relative to the root
    pub paths: Vec<String>,
}

impl RoutingDescriptor {
    fn new(kind: &'static str, paths: Vec<String>) -> Self {
        Self {
            kind: Some(kind),
            paths,
        }
    }
}

type Resolver = fn(&Path, &Scanner, &mut Diagnostics) -> RoutingDescriptor;

struct RoutingRule {
    frameworks: &'static [&'static str],
    resolve: Resolver,
}

static ROUTING_RULES: &[RoutingRule] = &[
    RoutingRule {
        frameworks: &[NEXT_JS],
        resolve: next_routes,
    },
    RoutingRule {
        frameworks: &[NUXT],
        resolve: nuxt_routes,
    },
    RoutingRule {
        frameworks: &[LARAVEL],
        resolve: laravel_routes,
    },
    RoutingRule {
        frameworks: &[NESTJS],
        resolve: nest_controllers,
    },
    RoutingRule {
        frameworks: &[EXPRESS, HONO],
        resolve: express_routes,
    },
];

/// Guess the routing convention from the detected frameworks.
pub fn detect_routing(
    root: &Path,
    frameworks: &[&str],
    scanner: &Scanner,
    diagnostics: &mut Diagnostics,
) -> RoutingDescriptor {
    ROUTING_RULES
        .iter()
        .find(|rule| rule.frameworks.iter().any(|f| frameworks.contains(f)))
        .map(|rule| (rule.resolve)(root, scanner, diagnostics))
        .unwrap_or_default()
}

/// First of `candidates` that is a directory under `root`, with a trailing `/`.
fn first_dir(root: &Path, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|dir| root.join(dir).is_dir())
        .map(|dir| format!("{dir}/"))
}

fn next_routes(root: &Path, _: &Scanner, _: &mut Diagnostics) -> RoutingDescriptor {
    if let Some(dir) = first_dir(root, &["app", "src/app"]) {
        RoutingDescriptor::new("next-app-router", vec![dir])
    } else if let Some(dir) = first_dir(root, &["pages", "src/pages"]) {
        RoutingDescriptor::new("next-pages-router", vec![dir])
    } else {
        RoutingDescriptor::default()
    }
}

fn nuxt_routes(root: &Path, _: &Scanner, _: &mut Diagnostics) -> RoutingDescriptor {
    first_dir(root, &["pages"])
        .map(|dir| RoutingDescriptor::new("nuxt-pages", vec![dir]))
        .unwrap_or_default()
}

fn laravel_routes(_: &Path, _: &Scanner, _: &mut Diagnostics) -> RoutingDescriptor {
    RoutingDescriptor::new(
        "laravel-routes",
        vec!["routes/api.php".to_string(), "routes/web.php".to_string()],
    )
}

/// Lists up to [`MAX_CONTROLLERS`] `*.controller.ts` files at any depth.
///
/// The walk prunes the same directories as the directory tree (block-list,
/// hidden directories, `--skip` names) and visits entries sorted by file
/// name, so vendored controllers under `node_modules` or `dist` are never
/// listed and the selection is stable between runs.
fn nest_controllers(
    root: &Path,
    scanner: &Scanner,
    diagnostics: &mut Diagnostics,
) -> RoutingDescriptor {
    let controllers =
        scanner.find_files_with_suffix(root, ".controller.ts", MAX_CONTROLLERS, diagnostics);
    RoutingDescriptor::new("nestjs-controllers", controllers)
}

fn express_routes(root: &Path, _: &Scanner, _: &mut Diagnostics) -> RoutingDescriptor {
    let paths = first_dir(root, &["routes", "src/routes"])
        .into_iter()
        .collect();
    RoutingDescriptor::new("express-routes", paths)
}
