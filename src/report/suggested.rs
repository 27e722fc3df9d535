//! Suggested preset files per stack type.

use serde::Serialize;

use crate::detection::StackType;

/// Preset files the downstream generator should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SuggestedFiles {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

const FRONTEND: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "03-frontend.md", "09-custom.md"],
    optional: &["05-testing.md"],
};

const BACKEND: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "04-backend.md", "09-custom.md"],
    optional: &["05-testing.md", "06-workflow.md"],
};

const FULLSTACK: SuggestedFiles = SuggestedFiles {
    required: &[
        "01-project.md",
        "02-standards.md",
        "03-frontend.md",
        "04-backend.md",
        "09-custom.md",
    ],
    optional: &["05-testing.md", "06-workflow.md"],
};

const MONOREPO: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "03-workspace.md", "09-custom.md"],
    optional: &["04-backend.md", "05-testing.md", "06-workflow.md"],
};

const CLI: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "09-custom.md"],
    optional: &["05-testing.md"],
};

const DOCS: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "03-content.md", "09-custom.md"],
    optional: &["04-components.md"],
};

const BOT: SuggestedFiles = SuggestedFiles {
    required: &["01-project.md", "02-standards.md", "04-backend.md", "09-custom.md"],
    optional: &["05-testing.md"],
};

impl SuggestedFiles {
    /// Suggestions for a stack type; `unknown` gets the fullstack set.
    #[must_use]
    pub const fn for_stack(stack: StackType) -> Self {
        match stack {
            StackType::Frontend | StackType::Mobile | StackType::Desktop => FRONTEND,
            StackType::Backend => BACKEND,
            StackType::Monorepo => MONOREPO,
            StackType::Cli => CLI,
            StackType::Docs => DOCS,
            StackType::Bot => BOT,
            StackType::Fullstack | StackType::Unknown => FULLSTACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_falls_back_to_fullstack() {
        assert_eq!(SuggestedFiles::for_stack(StackType::Unknown), FULLSTACK);
        assert_eq!(SuggestedFiles::for_stack(StackType::Fullstack), FULLSTACK);
    }

    #[test]
    fn test_dedicated_entries() {
        assert_eq!(
            SuggestedFiles::for_stack(StackType::Cli).required,
            ["01-project.md", "02-standards.md", "09-custom.md"]
        );
        assert_eq!(
            SuggestedFiles::for_stack(StackType::Docs).optional,
            ["04-components.md"]
        );
        assert_eq!(
            SuggestedFiles::for_stack(StackType::Monorepo).required[2],
            "03-workspace.md"
        );
        assert_eq!(
            SuggestedFiles::for_stack(StackType::Mobile),
            SuggestedFiles::for_stack(StackType::Frontend)
        );
    }

    #[test]
    fn test_every_entry_starts_with_project_and_ends_with_custom() {
        for stack in StackType::ALL {
            let files = SuggestedFiles::for_stack(stack);
            assert_eq!(files.required.first(), Some(&"01-project.md"));
            assert_eq!(files.required.last(), Some(&"09-custom.md"));
            assert!(!files.optional.is_empty());
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(SuggestedFiles::for_stack(StackType::Bot)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "required": ["01-project.md", "02-standards.md", "04-backend.md", "09-custom.md"],
                "optional": ["05-testing.md"]
            })
        );
    }
}
