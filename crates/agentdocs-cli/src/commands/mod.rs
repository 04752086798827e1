//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and renders the results. Shared wiring and report rendering live here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod new;

use agentdocs_adapters::{InMemoryStore, LocalFilesystem, SimpleRenderer};
use agentdocs_core::{
    application::ScaffoldService,
    domain::{RunStatus, ScaffoldReport, WriteStatus},
};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Scaffold service wired to the built-in templates and the local disk.
pub(crate) fn scaffold_service() -> CliResult<ScaffoldService> {
    Ok(ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin()?),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

/// Print per-file progress and the run summary.
///
/// Any failed file turns into [`CliError::PartialFailure`] so the process
/// exits non-zero.
pub(crate) fn finish_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
    } else {
        for outcome in &report.outcomes {
            match &outcome.status {
                WriteStatus::Written => {
                    output.success(&format!("Created {}", outcome.path.display()))?
                }
                WriteStatus::Failed { reason } => output.error(&format!(
                    "Failed {}: {reason}",
                    outcome.path.display()
                ))?,
            }
        }
    }

    check_report(report)
}

/// Map a report to the process outcome without printing anything.
pub(crate) fn check_report(report: &ScaffoldReport) -> CliResult<()> {
    match report.status() {
        RunStatus::Complete => Ok(()),
        RunStatus::PartialFailure(failed) => Err(CliError::PartialFailure {
            failed,
            total: report.outcomes.len(),
        }),
    }
}
