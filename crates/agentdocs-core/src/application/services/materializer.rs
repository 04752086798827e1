//! Directory materialization.

use std::path::Path;

use tracing::trace;

use crate::{application::ports::Filesystem, error::AgentDocsResult};

/// Create every missing ancestor directory of `path`.
///
/// Idempotent: existing directories are left alone. The filesystem port
/// reports the offending ancestor when one exists as a non-directory or
/// cannot be created.
pub fn ensure_parent_dirs(filesystem: &dyn Filesystem, path: &Path) -> AgentDocsResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            trace!(dir = %parent.display(), "ensuring directory");
            filesystem.create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
