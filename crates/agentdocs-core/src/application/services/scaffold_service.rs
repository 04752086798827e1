//! Scaffold Service - the scaffold writer.
//!
//! Coordinates one batch:
//! 1. Render each template through the renderer port
//! 2. Resolve `root / relative_path`
//! 3. Ensure the parent directory exists
//! 4. Write, overwriting any existing file
//! 5. Record `Written` or `Failed(reason)` and move on
//!
//! A failure on one file never aborts the batch.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::materializer::ensure_parent_dirs,
    },
    domain::{
        DomainValidator as validator, FileOutcome, OutputPlan, PlannedFile, ScaffoldReport,
        SubstitutionMap, Template, TemplateRegistry,
    },
    error::AgentDocsResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ScaffoldService::new(
    ///     Box::new(InMemoryStore::with_builtin()?),
    ///     Box::new(SimpleRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// The registry this service writes by default.
    pub fn registry(&self) -> AgentDocsResult<TemplateRegistry> {
        self.store.registry()
    }

    /// Write the whole registry under `root` with no substitutions.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn scaffold(&self, root: impl AsRef<Path>) -> AgentDocsResult<ScaffoldReport> {
        let registry = self.registry()?;
        info!(templates = registry.len(), "Scaffolding documentation set");
        Ok(self.write_all(root.as_ref(), registry.templates(), &SubstitutionMap::new()))
    }

    /// Resolve what [`scaffold`](Self::scaffold) would write, without writing.
    pub fn preview(&self, root: impl AsRef<Path>) -> AgentDocsResult<OutputPlan> {
        let registry = self.registry()?;
        Ok(self.plan(root.as_ref(), registry.templates(), &SubstitutionMap::new()))
    }

    /// Render every template and resolve its target path.
    pub fn plan(
        &self,
        root: &Path,
        templates: &[Template],
        substitutions: &SubstitutionMap,
    ) -> OutputPlan {
        let mut plan = OutputPlan::new(root);
        for template in templates {
            plan.add_file(PlannedFile {
                template: template.name.clone(),
                path: root.join(template.path.as_path()),
                content: self.renderer.render(template, substitutions),
                permissions: template.permissions,
            });
        }
        plan
    }

    /// Render and write `templates` under `root`, in order.
    ///
    /// Never fails as a whole: each file's outcome is recorded in the report.
    #[instrument(
        skip_all,
        fields(root = %root.display(), templates = templates.len(), tokens = substitutions.len())
    )]
    pub fn write_all(
        &self,
        root: &Path,
        templates: &[Template],
        substitutions: &SubstitutionMap,
    ) -> ScaffoldReport {
        let plan = self.plan(root, templates, substitutions);
        if let Err(e) = validator::validate_output_plan(&plan) {
            warn!(error = %e, "later templates will overwrite earlier ones");
        }
        debug!(
            files = plan.file_count(),
            bytes = plan.total_size(),
            "Templates rendered"
        );

        let report = self.materialize(&plan);

        let failed = report.failures().len();
        if failed == 0 {
            info!(files = report.outcomes.len(), "All files written");
        } else {
            warn!(failed, files = report.outcomes.len(), "Some files were not written");
        }
        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn materialize(&self, plan: &OutputPlan) -> ScaffoldReport {
        let mut report = ScaffoldReport::new(plan.root());

        for file in plan.files() {
            match self.write_file(file) {
                Ok(()) => {
                    info!(path = %file.path.display(), "Written");
                    report.record(FileOutcome::written(&file.template, &file.path));
                }
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "Write failed");
                    report.record(FileOutcome::failed(
                        &file.template,
                        &file.path,
                        e.to_string(),
                    ));
                }
            }
        }

        report
    }

    fn write_file(&self, file: &PlannedFile) -> AgentDocsResult<()> {
        ensure_parent_dirs(self.filesystem.as_ref(), &file.path)?;
        self.filesystem.write_file(&file.path, &file.content)?;

        if file.permissions.executable_flag() {
            self.filesystem
                .set_permissions(&file.path, true)
                .map_err(|e| {
                    ApplicationError::filesystem(
                        &file.path,
                        format!("file was written but could not be made executable ({e})"),
                    )
                })?;
        }

        Ok(())
    }
}
