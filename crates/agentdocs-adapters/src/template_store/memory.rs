//! In-memory template store with built-in templates.

use std::sync::{Arc, RwLock};

use agentdocs_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainError, DomainValidator as validator, Template, TemplateRegistry},
    error::AgentDocsResult,
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Holds one ordered [`TemplateRegistry`]; order is the order files are written.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<TemplateRegistry>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TemplateRegistry::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> AgentDocsResult<Self> {
        let store = Self::new();
        for template in builtin_templates::list_templates() {
            store.insert(template)?;
        }
        debug!(templates = store.len(), "Built-in templates loaded");
        Ok(store)
    }

    /// Append a template, keeping names and paths unique.
    pub fn insert(&self, template: Template) -> AgentDocsResult<()> {
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.push(template)?;
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn registry(&self) -> AgentDocsResult<TemplateRegistry> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        validator::validate_registry(&inner)?;
        Ok(inner.clone())
    }

    fn get(&self, name: &str) -> AgentDocsResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            DomainError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdocs_core::domain::RelativePath;
    use agentdocs_core::error::AgentDocsError;

    #[test]
    fn builtin_store_is_ordered() {
        let store = InMemoryStore::with_builtin().unwrap();
        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(
            names,
            [
                "context-priming",
                "implementation-patterns",
                "architecture-overview",
                "readme",
                "usage-guide",
                "setup-script",
            ]
        );
    }

    #[test]
    fn empty_store_has_no_registry() {
        let err = InMemoryStore::new().registry().unwrap_err();
        assert!(matches!(err, AgentDocsError::Domain(DomainError::EmptyRegistry)));
    }

    #[test]
    fn duplicate_path_rejected() {
        let store = InMemoryStore::new();
        store
            .insert(Template::new("a", RelativePath::new("README.md"), "a"))
            .unwrap();
        let err = store
            .insert(Template::new("b", RelativePath::new("README.md"), "b"))
            .unwrap_err();
        assert!(matches!(
            err,
            AgentDocsError::Domain(DomainError::DuplicatePath { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_by_name() {
        let store = InMemoryStore::with_builtin().unwrap();
        let readme = store.get("readme").unwrap();
        assert_eq!(readme.path.as_path(), std::path::Path::new("README.md"));
        assert!(store.get("missing").is_err());
    }
}
