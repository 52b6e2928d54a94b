//! Git remote adapter using libgit2.
//!
//! The only read this adapter performs is the URL of the `origin` remote.
//! Identity resolution with an explicit URL bypasses it entirely, so a
//! working directory that is not a repository is only an error when
//! detection is actually needed.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use ossify_core::{
    application::{ApplicationError, ports::RemoteConfig},
    error::OssifyResult,
};

/// Production remote reader backed by libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRemoteConfig;

impl GitRemoteConfig {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteConfig for GitRemoteConfig {
    fn origin_url(&self, workdir: &Path) -> OssifyResult<String> {
        let repo = Repository::open(workdir).map_err(|e| ApplicationError::IdentityResolution {
            workdir: workdir.to_path_buf(),
            reason: format!("not a git repository: {}", e.message()),
        })?;

        let remote = repo
            .find_remote("origin")
            .map_err(|e| ApplicationError::IdentityResolution {
                workdir: workdir.to_path_buf(),
                reason: format!("no 'origin' remote: {}", e.message()),
            })?;

        let url = remote
            .url()
            .ok_or_else(|| ApplicationError::IdentityResolution {
                workdir: workdir.to_path_buf(),
                reason: "'origin' URL is not valid UTF-8".into(),
            })?;

        debug!(url, "read origin remote");
        Ok(url.to_owned())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
