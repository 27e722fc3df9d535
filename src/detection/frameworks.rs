//! Framework signature table.
//!
//! Clause order within each entry is: marker files, `package.json`
//! dependencies, `composer.json` dependencies.
//!
//! Python and Go frameworks are only recognised by marker files. Their
//! dependency declarations are never read, so `fastapi`, `flask`, `gin` and
//! `fiber` keep a table slot but are never reported.

use super::signature::{Clause, DetectionContext, Signature, detect};

pub const NEXT_JS: &str = "next.js";
pub const NUXT: &str = "nuxt";
pub const REACT: &str = "react";
pub const VUE: &str = "vue";
pub const ANGULAR: &str = "angular";
pub const SVELTE: &str = "svelte";
pub const EXPRESS: &str = "express";
pub const NESTJS: &str = "nestjs";
pub const HONO: &str = "hono";
pub const FASTIFY: &str = "fastify";
pub const LARAVEL: &str = "laravel";
pub const SYMFONY: &str = "symfony";
pub const DJANGO: &str = "django";
pub const FASTAPI: &str = "fastapi";
pub const FLASK: &str = "flask";
pub const GIN: &str = "gin";
pub const FIBER: &str = "fiber";
pub const FLUTTER: &str = "flutter";
pub const REACT_NATIVE: &str = "react-native";
pub const TAURI: &str = "tauri";
pub const ELECTRON: &str = "electron";
pub const PNPM_WORKSPACE: &str = "pnpm-workspace";
pub const TURBOREPO: &str = "turborepo";
pub const NX: &str = "nx";
pub const LERNA: &str = "lerna";
pub const VITEPRESS: &str = "vitepress";
pub const DOCUSAURUS: &str = "docusaurus";
pub const MKDOCS: &str = "mkdocs";
pub const DISCORD_JS: &str = "discord.js";
pub const TELEGRAF: &str = "telegraf";

/// Every known framework, in reporting order.
pub static FRAMEWORK_SIGNATURES: &[Signature] = &[
    // JavaScript / TypeScript
    Signature {
        name: NEXT_JS,
        clauses: &[
            Clause::Files(&["next.config.js", "next.config.mjs", "next.config.ts"]),
            Clause::Deps(&["next"]),
        ],
    },
    Signature {
        name: NUXT,
        clauses: &[
            Clause::Files(&["nuxt.config.js", "nuxt.config.ts"]),
            Clause::Deps(&["nuxt"]),
        ],
    },
    Signature {
        name: REACT,
        clauses: &[Clause::Deps(&["react", "react-dom"])],
    },
    Signature {
        name: VUE,
        clauses: &[Clause::Deps(&["vue"])],
    },
    Signature {
        name: ANGULAR,
        clauses: &[
            Clause::Files(&["angular.json"]),
            Clause::Deps(&["@angular/core"]),
        ],
    },
    Signature {
        name: SVELTE,
        clauses: &[Clause::Files(&["svelte.config.js"]), Clause::Deps(&["svelte"])],
    },
    Signature {
        name: EXPRESS,
        clauses: &[Clause::Deps(&["express"])],
    },
    Signature {
        name: NESTJS,
        clauses: &[Clause::Deps(&["@nestjs/core"])],
    },
    Signature {
        name: HONO,
        clauses: &[Clause::Deps(&["hono"])],
    },
    Signature {
        name: FASTIFY,
        clauses: &[Clause::Deps(&["fastify"])],
    },
    // PHP
    Signature {
        name: LARAVEL,
        clauses: &[
            Clause::Files(&["artisan"]),
            Clause::ComposerDeps(&["laravel/framework"]),
        ],
    },
    Signature {
        name: SYMFONY,
        clauses: &[
            Clause::Files(&["symfony.yaml", "config/packages"]),
            Clause::ComposerDeps(&["symfony/framework-bundle"]),
        ],
    },
    // Python
    Signature {
        name: DJANGO,
        clauses: &[Clause::Files(&["manage.py"])],
    },
    Signature {
        name: FASTAPI,
        clauses: &[],
    },
    Signature {
        name: FLASK,
        clauses: &[],
    },
    // Go
    Signature {
        name: GIN,
        clauses: &[],
    },
    Signature {
        name: FIBER,
        clauses: &[],
    },
    // Mobile
    Signature {
        name: FLUTTER,
        clauses: &[Clause::Files(&["pubspec.yaml"])],
    },
    Signature {
        name: REACT_NATIVE,
        clauses: &[
            Clause::Files(&["app.json", "metro.config.js"]),
            Clause::Deps(&["react-native"]),
        ],
    },
    // Desktop
    Signature {
        name: TAURI,
        clauses: &[Clause::Files(&["tauri.conf.json", "src-tauri"])],
    },
    Signature {
        name: ELECTRON,
        clauses: &[Clause::Deps(&["electron"])],
    },
    // Monorepo tools
    Signature {
        name: PNPM_WORKSPACE,
        clauses: &[Clause::Files(&["pnpm-workspace.yaml"])],
    },
    Signature {
        name: TURBOREPO,
        clauses: &[Clause::Files(&["turbo.json"])],
    },
    Signature {
        name: NX,
        clauses: &[Clause::Files(&["nx.json"])],
    },
    Signature {
        name: LERNA,
        clauses: &[Clause::Files(&["lerna.json"])],
    },
    // Docs
    Signature {
        name: VITEPRESS,
        clauses: &[Clause::Deps(&["vitepress"])],
    },
    Signature {
        name: DOCUSAURUS,
        clauses: &[Clause::Deps(&["@docusaurus/core"])],
    },
    Signature {
        name: MKDOCS,
        clauses: &[Clause::Files(&["mkdocs.yml"])],
    },
    // Bots
    Signature {
        name: DISCORD_JS,
        clauses: &[Clause::Deps(&["discord.js"])],
    },
    Signature {
        name: TELEGRAF,
        clauses: &[Clause::Deps(&["telegraf"])],
    },
];

/// Detect every framework whose signature matches the project.
#[must_use]
pub fn detect_frameworks(ctx: &DetectionContext<'_>) -> Vec<&'static str> {
    detect(FRAMEWORK_SIGNATURES, ctx)
}
