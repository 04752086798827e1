// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for agentdocs.
//!
//! Pure data and logic with no I/O. Filesystem access and template storage
//! are reached through the ports in `crate::application::ports`.
//!
//! - **No I/O**: No filesystem, network, or console calls
//! - **Immutable templates**: the registry is built once and only read
//! - **Total rendering**: substitution never fails
//!
// Public API - what the world sees
pub mod answers;
pub mod entities;
pub mod error;
pub mod substitution;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use answers::{ProjectAnswers, PromptKey, TECHNOLOGY_TOKEN, project_dir_name};
pub use entities::{
    output_plan::{OutputPlan, PlannedFile},
    report::{FailedFile, FileOutcome, RunStatus, ScaffoldReport, WriteStatus},
    template::{RenderMode, Template, TemplateRegistry, TemplateSource},
};
pub use error::{DomainError, ErrorCategory};
pub use substitution::{SubstitutionMap, placeholder, render};

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;
