//! Built-in template registry.
//!
//! This module provides [`list_templates`], the single entry-point for the
//! documentation set that ships with agentdocs. Bodies are embedded at build
//! time from `templates/`; the registry itself stays small and declarative.
//!
//! # Order
//!
//! Templates are listed in the order they are written and reported:
//!
//! 1. `docs/PROJECT_CONTEXT_PRIMING.md` (customizable)
//! 2. `cursor/rules/implementation_patterns.mdc`
//! 3. `docs/architecture_overview.md` (customizable)
//! 4. `README.md` (customizable)
//! 5. `USAGE_GUIDE.md`
//! 6. `scripts/setup_new_project.sh` (executable)

use agentdocs_core::domain::{RelativePath, Template};

// ── Embedded bodies ───────────────────────────────────────────────────────────

const CONTEXT_PRIMING: &str = include_str!("../templates/PROJECT_CONTEXT_PRIMING.md");
const IMPLEMENTATION_PATTERNS: &str = include_str!("../templates/implementation_patterns.mdc");
const ARCHITECTURE_OVERVIEW: &str = include_str!("../templates/architecture_overview.md");
const README: &str = include_str!("../templates/README.md");
const USAGE_GUIDE: &str = include_str!("../templates/USAGE_GUIDE.md");
const SETUP_SCRIPT: &str = include_str!("../templates/setup_new_project.sh");

// ── Public API ────────────────────────────────────────────────────────────────

/// The default registry, in write order.
pub fn list_templates() -> Vec<Template> {
    vec![
        Template::new(
            "context-priming",
            path(&["docs", "PROJECT_CONTEXT_PRIMING.md"]),
            CONTEXT_PRIMING,
        )
        .description("Project identity and working agreement for AI sessions")
        .customizable(),
        Template::new(
            "implementation-patterns",
            path(&["cursor", "rules", "implementation_patterns.mdc"]),
            IMPLEMENTATION_PATTERNS,
        )
        .description("Coding rules applied to every change"),
        Template::new(
            "architecture-overview",
            path(&["docs", "architecture_overview.md"]),
            ARCHITECTURE_OVERVIEW,
        )
        .description("Component map, data flow and decisions")
        .customizable(),
        Template::new("readme", path(&["README.md"]), README)
            .description("Project front page")
            .customizable(),
        Template::new("usage-guide", path(&["USAGE_GUIDE.md"]), USAGE_GUIDE)
            .description("How to use the generated documentation set"),
        Template::new(
            "setup-script",
            path(&["scripts", "setup_new_project.sh"]),
            SETUP_SCRIPT,
        )
        .description("Shell helper that runs `agentdocs new`")
        .executable(),
    ]
}

/// Literal segments only; checked by the registry tests below.
fn path(segments: &[&str]) -> RelativePath {
    RelativePath::new(segments.iter().collect::<std::path::PathBuf>())
}
