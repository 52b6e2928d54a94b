//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ossify-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{TemplateEntry, TemplateTier};
use crate::error::OssifyResult;

/// Port for reading the working copy's remote configuration.
///
/// Implemented by:
/// - `ossify_adapters::GitRemoteConfig` (production, libgit2)
///
/// The port covers exactly one read: the URL of the remote named `origin`.
/// Identity resolution with an explicit URL never calls it.
pub trait RemoteConfig: Send + Sync {
    /// The configured URL of the `origin` remote at `workdir`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::IdentityResolution` when `workdir` is not a
    /// repository or has no `origin` remote.
    fn origin_url(&self, workdir: &Path) -> OssifyResult<String>;
}

/// Port for scanning one template tier directory.
///
/// Implemented by:
/// - `ossify_adapters::LocalTierScanner` (production, walkdir)
///
/// Scans are independent and read-only; the orchestrator may issue them
/// concurrently, so implementations must be callable from multiple threads.
pub trait TierScanner: Send + Sync {
    /// All template entries in the tier, in no particular order.
    ///
    /// Only marker-prefixed files are returned; everything else in the
    /// directory is ignored.
    ///
    /// # Errors
    ///
    /// `ApplicationError::TierRead` when the tier directory cannot be
    /// listed. The locator never passes a tier it found missing, but the
    /// existence check is advisory: a tier can vanish between check and
    /// scan, and that is a `TierRead`, not a crash.
    fn scan(&self, tier: &TemplateTier) -> OssifyResult<Vec<TemplateEntry>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ossify_adapters::LocalFilesystem` (production)
/// - `ossify_adapters::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> OssifyResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> OssifyResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> OssifyResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
