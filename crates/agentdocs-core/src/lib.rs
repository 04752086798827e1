//! agentdocs Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the agentdocs
//! documentation scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          agentdocs-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, ProjectInitializer)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    agentdocs-adapters (Infrastructure)  │
//! │ (InMemoryStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Template, SubstitutionMap, Answers)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agentdocs_core::prelude::*;
//!
//! let service = ScaffoldService::new(store, renderer, filesystem);
//! let report = service.scaffold("./universal-ai-docs")?;
//! assert!(report.is_complete());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectInitResult, ProjectInitializer, ScaffoldService, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        FileOutcome, OutputPlan, ProjectAnswers, PromptKey, RenderMode, RunStatus,
        ScaffoldReport, SubstitutionMap, Template, TemplateRegistry, WriteStatus,
    };
    pub use crate::error::{AgentDocsError, AgentDocsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
