//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "write the documentation set" or
//! "initialize a project".

pub mod materializer;
pub mod project_initializer;
pub mod scaffold_service;
pub mod template_service;

pub use materializer::ensure_parent_dirs;
pub use project_initializer::{DATE_FORMAT, ProjectInitResult, ProjectInitializer};
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateService};
