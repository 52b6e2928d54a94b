//! Repository identity: who owns the repository and what it is called.
//!
//! The identity is resolved once at the start of a scaffold run, either
//! from an explicitly supplied URL or from the working copy's `origin`
//! remote, and is read-only afterwards. It feeds the render parameter set.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// The `{organization, project}` pair extracted from a hosting-service URL.
///
/// Both segments are case-preserving: `WebFactory/GeneratorProject` stays
/// exactly as written. Lowercased/dashed variants are derived later by
/// [`crate::domain::RenderParameters`], never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIdentity {
    organization: String,
    project: String,
}

impl RepositoryIdentity {
    /// Parse a remote URL into an identity.
    ///
    /// Recognized shapes (the two used by every major hosting service):
    ///
    /// - scp-like SSH: `git@github.com:org/repo.git`
    /// - scheme URLs:  `https://github.com/org/repo`, `ssh://git@host/org/repo.git`
    ///
    /// A trailing `.git` suffix and trailing slashes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UrlParse`] when the URL has no recognizable
    /// shape or when the organization or project segment is missing.
    pub fn parse(url: &str) -> Result<Self, DomainError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(parse_error(url, "URL is empty"));
        }

        let path = if let Some((_, rest)) = trimmed.split_once("://") {
            // Scheme URL: authority (optionally user@host) then path.
            let rest = rest.strip_prefix_user();
            match rest.split_once('/') {
                Some((_host, path)) => path,
                None => return Err(parse_error(url, "missing path after host")),
            }
        } else if let Some((user_host, path)) = trimmed.split_once(':') {
            // scp-like: user@host:path. The '@' requirement rules out
            // Windows drive letters and other colon-bearing strings.
            if !user_host.contains('@') {
                return Err(parse_error(url, "unrecognized URL shape"));
            }
            path
        } else {
            return Err(parse_error(url, "unrecognized URL shape"));
        };

        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let organization = segments
            .next()
            .ok_or_else(|| parse_error(url, "missing organization segment"))?;
        let project = segments
            .next()
            .ok_or_else(|| parse_error(url, "missing project segment"))?;
        let project = project.strip_suffix(".git").unwrap_or(project);

        if project.is_empty() {
            return Err(parse_error(url, "missing project segment"));
        }

        Ok(Self {
            organization: organization.to_owned(),
            project: project.to_owned(),
        })
    }

    /// Construct directly (used by tests and fixtures).
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.project)
    }
}

fn parse_error(url: &str, reason: &str) -> DomainError {
    DomainError::UrlParse {
        url: url.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Strip an optional `user@` prefix from an authority string.
trait StripUser {
    fn strip_prefix_user(&self) -> &str;
}

impl StripUser for str {
    fn strip_prefix_user(&self) -> &str {
        match self.split_once('@') {
            // Only strip when the '@' sits before the first '/', i.e. it is
            // part of the authority and not of the path.
            Some((user, rest)) if !user.contains('/') => rest,
            _ => self,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
