//! Project Initializer - personalised documentation sets.
//!
//! Validates the project name before any I/O, renders the customizable
//! templates with the operator's answers, then copies the rest verbatim into
//! the same directory.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::services::ScaffoldService,
    domain::{
        DomainValidator as validator, ProjectAnswers, PromptKey, ScaffoldReport, SubstitutionMap,
        project_dir_name,
    },
    error::AgentDocsResult,
};

/// Date format substituted for `[DATE]`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a project was initialized and what was written.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInitResult {
    pub project_dir: PathBuf,
    pub report: ScaffoldReport,
}

pub struct ProjectInitializer {
    scaffold: ScaffoldService,
}

impl ProjectInitializer {
    pub fn new(scaffold: ScaffoldService) -> Self {
        Self { scaffold }
    }

    /// Create `<output_base>/<dir name>` and fill it with the documentation set.
    ///
    /// The directory name is the project name lowercased with spaces turned
    /// into hyphens. Fails with `InvalidInput` before touching the filesystem
    /// when the name is blank. Per-file failures are recorded in the report.
    #[instrument(skip(self, answers, output_base), fields(base = %output_base.as_ref().display()))]
    pub fn initialize_project(
        &self,
        project_name: &str,
        answers: &ProjectAnswers,
        output_base: impl AsRef<Path>,
    ) -> AgentDocsResult<ProjectInitResult> {
        validator::validate_project_name(project_name)?;

        let name = project_name.trim();
        let project_dir = output_base.as_ref().join(project_dir_name(name));
        let registry = self.scaffold.registry()?;

        let substitutions = Self::substitutions(name, answers);
        debug!(tokens = substitutions.len(), "Substitution map built");

        info!(dir = %project_dir.display(), "Initializing project");
        let mut report =
            self.scaffold
                .write_all(&project_dir, &registry.customizable(), &substitutions);
        report.extend(self.scaffold.write_all(
            &project_dir,
            &registry.verbatim(),
            &SubstitutionMap::new(),
        ));

        Ok(ProjectInitResult {
            project_dir,
            report,
        })
    }

    /// Answers as tokens, with the project name and date filled in when blank.
    fn substitutions(name: &str, answers: &ProjectAnswers) -> SubstitutionMap {
        let mut answers = answers.clone();
        if is_blank(answers.get(PromptKey::ProjectName)) {
            answers.insert(PromptKey::ProjectName.as_str(), name);
        }
        if is_blank(answers.get(PromptKey::Date)) {
            answers.insert(
                PromptKey::Date.as_str(),
                Local::now().format(DATE_FORMAT).to_string(),
            );
        }
        answers.substitutions()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
