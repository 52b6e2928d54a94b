//! Template rendering: substitute parameters and write the result.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{RenderParameters, TemplateEntry};
use crate::error::OssifyResult;

/// Renders winning template entries to their destinations.
///
/// Writing is all-or-nothing per file: the template is read and fully
/// substituted in memory first; nothing is created at the destination
/// unless the rendered content is complete. An unresolved placeholder is a
/// template-authoring error and fails the file closed instead of writing
/// partial output.
pub struct FileRenderer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileRenderer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Render one entry into `workdir`, returning the path written.
    #[instrument(skip_all, fields(destination = %entry.destination().display()))]
    pub fn render(
        &self,
        workdir: &Path,
        entry: &TemplateEntry,
        params: &RenderParameters,
    ) -> OssifyResult<PathBuf> {
        let destination = workdir.join(entry.destination());

        let raw = self
            .filesystem
            .read_to_string(entry.source_path())
            .map_err(|e| ApplicationError::Render {
                destination: destination.clone(),
                reason: format!(
                    "cannot read template '{}': {e}",
                    entry.source_path().display()
                ),
            })?;

        let rendered = params.substitute(&raw);
        if let Some(placeholder) = RenderParameters::first_unresolved(&rendered) {
            return Err(ApplicationError::Render {
                destination,
                reason: format!("unresolved placeholder '{{{{{placeholder}}}}}'"),
            }
            .into());
        }

        if let Some(parent) = destination.parent() {
            self.filesystem
                .create_dir_all(parent)
                .map_err(|e| ApplicationError::Render {
                    destination: destination.clone(),
                    reason: format!("cannot create parent directory: {e}"),
                })?;
        }

        self.filesystem
            .write_file(&destination, &rendered)
            .map_err(|e| ApplicationError::Render {
                destination: destination.clone(),
                reason: format!("cannot write destination: {e}"),
            })?;

        debug!(bytes = rendered.len(), "rendered");
        Ok(destination)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
