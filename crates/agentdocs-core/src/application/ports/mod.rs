//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `agentdocs-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateStore`: Template registry access
//!   - `TemplateRenderer`: Placeholder substitution

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{Filesystem, TemplateRenderer, TemplateStore};
