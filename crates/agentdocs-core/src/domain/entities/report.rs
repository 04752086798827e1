use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome of writing a single template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteStatus {
    Written,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub template: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: WriteStatus,
}

impl FileOutcome {
    pub fn written(template: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            path: path.into(),
            status: WriteStatus::Written,
        }
    }

    pub fn failed(
        template: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            path: path.into(),
            status: WriteStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self.status, WriteStatus::Written)
    }
}

/// A file that could not be written, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Overall result of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    PartialFailure(Vec<FailedFile>),
}

/// Per-template outcomes of one run, in the order they were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Append the outcomes of a later batch against the same root.
    pub fn extend(&mut self, other: ScaffoldReport) {
        self.outcomes.extend(other.outcomes);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn written(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn failures(&self) -> Vec<FailedFile> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.status {
                WriteStatus::Failed { reason } => Some(FailedFile {
                    path: o.path.clone(),
                    reason: reason.clone(),
                }),
                WriteStatus::Written => None,
            })
            .collect()
    }

    pub fn status(&self) -> RunStatus {
        let failed = self.failures();
        if failed.is_empty() {
            RunStatus::Complete
        } else {
            RunStatus::PartialFailure(failed)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_written)
    }
}
