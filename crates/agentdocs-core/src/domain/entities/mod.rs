pub mod common;
pub mod output_plan;
pub mod report;
pub mod template;

pub use crate::domain::DomainError;
pub use output_plan::{OutputPlan, PlannedFile};
pub use report::{FailedFile, FileOutcome, RunStatus, ScaffoldReport, WriteStatus};
pub use template::{Template, TemplateRegistry};
