//! Literal bracket-token renderer.

use agentdocs_core::{
    application::ports::TemplateRenderer,
    domain::{SubstitutionMap, Template, render},
};
use tracing::trace;

/// Renderer that replaces every literal occurrence of each token.
///
/// No grammar, no escaping. Tokens not in the map pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, template: &Template, substitutions: &SubstitutionMap) -> String {
        trace!(template = %template.name, tokens = substitutions.len(), "rendering");
        render(template.body(), substitutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdocs_core::domain::RelativePath;

    fn template(body: &'static str) -> Template {
        Template::new("t", RelativePath::new("t.md"), body)
    }

    #[test]
    fn substitutes_known_tokens() {
        let map = SubstitutionMap::new().with("[NAME]", "World");
        let out = SimpleRenderer::new().render(&template("Hello [NAME]"), &map);
        assert_eq!(out, "Hello World");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let map = SubstitutionMap::new().with("[NAME]", "World");
        let out = SimpleRenderer::new().render(&template("Hello [NAME] and [OTHER]"), &map);
        assert_eq!(out, "Hello World and [OTHER]");
    }

    #[test]
    fn empty_map_is_identity() {
        let body = "# [PROJECT_NAME]\n\nBuilt on [DATE].";
        let out = SimpleRenderer::new().render(&template(body), &SubstitutionMap::new());
        assert_eq!(out, body);
    }
}
