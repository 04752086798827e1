//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `agentdocs-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{SubstitutionMap, Template, TemplateRegistry};
use crate::error::AgentDocsResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `agentdocs_adapters::filesystem::LocalFilesystem` (production)
/// - `agentdocs_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and every missing ancestor, root to leaf.
    ///
    /// Succeeds when the directory already exists. Fails with
    /// `ApplicationError::FilesystemError` naming the offending path when an
    /// ancestor is not a directory or cannot be created.
    fn create_dir_all(&self, path: &Path) -> AgentDocsResult<()>;

    /// Write content to a file, replacing whatever is there.
    fn write_file(&self, path: &Path, content: &str) -> AgentDocsResult<()>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> AgentDocsResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `agentdocs_adapters::template_store::InMemoryStore` (built-in templates)
pub trait TemplateStore: Send + Sync {
    /// The full registry, in order.
    fn registry(&self) -> AgentDocsResult<TemplateRegistry>;

    /// All templates, in registry order.
    fn list(&self) -> AgentDocsResult<Vec<Template>> {
        Ok(self.registry()?.into_templates())
    }

    /// A single template by name.
    fn get(&self, name: &str) -> AgentDocsResult<Template>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `agentdocs_adapters::renderer::SimpleRenderer` (literal substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template body. Never fails; unknown tokens pass through.
    fn render(&self, template: &Template, substitutions: &SubstitutionMap) -> String;
}
