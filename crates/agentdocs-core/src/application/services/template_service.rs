//! Template Service - template queries.
//!
//! Read-only access to the registry for listing and lookup.
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{RenderMode, Template},
    error::AgentDocsResult,
};

/// Template metadata for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub path: String,
    pub mode: RenderMode,
    pub executable: bool,
    pub description: String,
    pub size: usize,
}

impl From<&Template> for TemplateInfo {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            path: template.path.to_string(),
            mode: template.mode,
            executable: template.permissions.executable_flag(),
            description: template.description.clone(),
            size: template.body().len(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> AgentDocsResult<Template> {
        self.store.get(name)
    }

    /// List all templates, in registry order.
    pub fn list(&self) -> AgentDocsResult<Vec<Template>> {
        self.store.list()
    }

    /// Metadata for every template, in registry order.
    pub fn info(&self) -> AgentDocsResult<Vec<TemplateInfo>> {
        Ok(self.list()?.iter().map(TemplateInfo::from).collect())
    }
}
