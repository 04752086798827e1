use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{entities::common::Permissions, error::DomainError};

/// Resolved files for one scaffold run, ready for materialization.
///
/// Transient: computed from the registry and a substitution map, consumed by
/// the write step, never persisted.
#[derive(Debug, Clone)]
pub struct OutputPlan {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<PlannedFile>,
}

impl OutputPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    pub fn with_file(mut self, file: PlannedFile) -> Self {
        self.add_file(file);
        self
    }

    /// No two planned files may target the same path.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total bytes that would be written.
    pub fn total_size(&self) -> usize {
        self.files.iter().map(PlannedFile::size).sum()
    }
}

/// One rendered template bound to its resolved target path.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub template: String,
    /// Output root joined with the template's relative path.
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
    #[serde(skip)]
    pub permissions: Permissions,
}

impl PlannedFile {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
