//! Tier locating: which template source directories apply to a run.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{COMMON_TIER, ProjectClass, TemplateTier};

/// Computes the ordered tier list for a classification.
///
/// The order is fixed and is the single source of truth for override
/// precedence downstream: the `common` tier first (lowest priority), then
/// the tier named after the classification (highest priority).
pub struct TierLocator<'a> {
    template_root: &'a Path,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TierLocator<'a> {
    pub fn new(template_root: &'a Path, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            template_root,
            filesystem,
        }
    }

    /// The ordered tier list, lowest priority first.
    ///
    /// Never fails: tiers whose directory does not exist are silently
    /// omitted, so the result may be empty or single-element. The existence
    /// check is advisory; discovery still reports a first-class error if
    /// an existing tier becomes unreadable afterwards.
    pub fn locate(&self, class: ProjectClass) -> Vec<TemplateTier> {
        [COMMON_TIER, class.tier_name()]
            .into_iter()
            .filter_map(|name| {
                let path = self.template_root.join(name);
                if self.filesystem.exists(&path) {
                    Some((name, path))
                } else {
                    debug!(tier = name, path = %path.display(), "tier absent, omitting");
                    None
                }
            })
            .enumerate()
            .map(|(rank, (name, path))| TemplateTier::new(name, path, rank))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
