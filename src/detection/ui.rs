//! UI and styling toolkit signature table.
//!
//! Clause order within each entry is: marker files, marker directories,
//! exact dependency names, dependency-name prefix.

use super::signature::{Clause, DetectionContext, Signature, detect};

pub static UI_SIGNATURES: &[Signature] = &[
    Signature {
        name: "tailwindcss",
        clauses: &[
            Clause::Files(&["tailwind.config.js", "tailwind.config.ts"]),
            Clause::Deps(&["tailwindcss"]),
        ],
    },
    Signature {
        name: "shadcn-ui",
        clauses: &[
            Clause::Files(&["components.json"]),
            Clause::Dirs(&["components/ui"]),
        ],
    },
    Signature {
        name: "radix-ui",
        clauses: &[Clause::DepPrefix("@radix-ui/")],
    },
    Signature {
        name: "chakra-ui",
        clauses: &[Clause::Deps(&["@chakra-ui/react"])],
    },
    Signature {
        name: "material-ui",
        clauses: &[Clause::Deps(&["@mui/material"])],
    },
    Signature {
        name: "ant-design",
        clauses: &[Clause::Deps(&["antd"])],
    },
    Signature {
        name: "bootstrap",
        clauses: &[Clause::Deps(&["bootstrap"])],
    },
    Signature {
        name: "vuetify",
        clauses: &[Clause::Deps(&["vuetify"])],
    },
];

/// Detect every UI toolkit whose signature matches the project.
#[must_use]
pub fn detect_ui_frameworks(ctx: &DetectionContext<'_>) -> Vec<&'static str> {
    detect(UI_SIGNATURES, ctx)
}
