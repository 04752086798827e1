//! Template domain model and the ordered template registry.
//!
//! A [`Template`] is a named, static text body bound to one relative output
//! path. The [`TemplateRegistry`] is the ordered, validated collection of
//! templates a scaffold run writes.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ TemplateRegistry (ordered, validated)         │
//! │  └── Vec<Template>                            │
//! │       ├── name        "readme"                │
//! │       ├── path        RelativePath "README.md"│
//! │       ├── body        TemplateSource          │
//! │       ├── mode        Customizable | Verbatim │
//! │       └── permissions Permissions             │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Template bodies are data, not code. Built-in bodies are compiled into the
//! binary and referenced through [`TemplateSource::Static`]; anything built at
//! runtime (tests, future user templates) owns its text.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// Where a template body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Static(&'static str),
    /// Built at runtime.
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }
}

/// Whether a template takes part in project customization.
///
/// `Customizable` templates are rendered with the operator's answers when a
/// project is initialized; `Verbatim` ones are copied as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Customizable,
    #[default]
    Verbatim,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customizable => write!(f, "customizable"),
            Self::Verbatim => write!(f, "verbatim"),
        }
    }
}

/// A named, static text body destined for a fixed relative output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub path: RelativePath,
    pub body: TemplateSource,
    pub mode: RenderMode,
    pub permissions: Permissions,
}

impl Template {
    /// Create a verbatim, non-executable template.
    pub fn new(name: impl Into<String>, path: RelativePath, body: impl Into<TemplateSource>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            path,
            body: body.into(),
            mode: RenderMode::Verbatim,
            permissions: Permissions::read_write(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the template as taking part in project customization.
    pub fn customizable(mut self) -> Self {
        self.mode = RenderMode::Customizable;
        self
    }

    /// Mark the written file as executable.
    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }

    pub fn is_customizable(&self) -> bool {
        self.mode == RenderMode::Customizable
    }

    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Validate the template in isolation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "template name",
                format!("template at '{}' has no name", self.path),
            ));
        }
        Ok(())
    }
}

/// Ordered collection of templates.
///
/// Order is significant: it is the order files are written and reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate a registry in one step.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self, DomainError> {
        let registry = Self { templates };
        registry.validate()?;
        Ok(registry)
    }

    /// Append a template, rejecting anything that would break the registry
    /// invariants.
    pub fn push(&mut self, template: Template) -> Result<(), DomainError> {
        template.validate()?;
        if self.templates.iter().any(|t| t.name == template.name) {
            return Err(DomainError::DuplicateTemplateName {
                name: template.name,
            });
        }
        if self.templates.iter().any(|t| t.path == template.path) {
            return Err(DomainError::DuplicatePath {
                path: template.path.to_string(),
            });
        }
        self.templates.push(template);
        Ok(())
    }

    /// Check the registry invariants: non-empty, unique names, unique paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.templates.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }

        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        for template in &self.templates {
            template.validate()?;
            if !names.insert(template.name.as_str()) {
                return Err(DomainError::DuplicateTemplateName {
                    name: template.name.clone(),
                });
            }
            if !paths.insert(&template.path) {
                return Err(DomainError::DuplicatePath {
                    path: template.path.to_string(),
                });
            }
        }

        Ok(())
    }

    /// All templates, in registry order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Templates rendered with the operator's answers.
    pub fn customizable(&self) -> Vec<Template> {
        self.templates
            .iter()
            .filter(|t| t.is_customizable())
            .cloned()
            .collect()
    }

    /// Templates copied without substitution.
    pub fn verbatim(&self) -> Vec<Template> {
        self.templates
            .iter()
            .filter(|t| !t.is_customizable())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn into_templates(self) -> Vec<Template> {
        self.templates
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
