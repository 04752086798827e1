//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use agentdocs_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{AgentDocsError, AgentDocsResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    /// Walks the path root to leaf so the error names the exact ancestor
    /// that blocked creation.
    fn create_dir_all(&self, path: &Path) -> AgentDocsResult<()> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);

            match std::fs::metadata(&current) {
                Ok(meta) if meta.is_dir() => continue,
                Ok(_) => {
                    return Err(ApplicationError::filesystem(
                        &current,
                        "exists and is not a directory",
                    )
                    .into());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(map_io_error(&current, e, "inspect")),
            }

            trace!(dir = %current.display(), "creating directory");
            match std::fs::create_dir(&current) {
                Ok(()) => {}
                // Lost a race with another writer; fine if it is a directory.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists && current.is_dir() => {}
                Err(e) => return Err(map_io_error(&current, e, "create directory")),
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AgentDocsResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> AgentDocsResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(if executable {
                mode | 0o111
            } else {
                mode & !0o111
            });
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit outside unix
            let _ = (path, executable);
        }
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> AgentDocsError {
    ApplicationError::filesystem(path, format!("Failed to {operation}: {e}")).into()
}
