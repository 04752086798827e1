//! Application layer for agentdocs.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ProjectInitializer, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ProjectInitResult, ProjectInitializer, ScaffoldService,
    TemplateInfo, // DTO for template metadata
    TemplateService, ensure_parent_dirs,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
