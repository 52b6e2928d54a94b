//! Filesystem tier scanner.
//!
//! Walks one tier directory and returns every template it contains: files
//! whose name carries the leading `_` marker. Everything else (docs, loose
//! notes, unmarked files) is ignored. Templates nested in subdirectories
//! keep their relative structure: `.github/workflows/_ci.yml` renders to
//! `.github/workflows/ci.yml` at the destination.

use tracing::{instrument, trace};
use walkdir::WalkDir;

use ossify_core::{
    application::{ApplicationError, ports::TierScanner},
    domain::{TemplateEntry, TemplateTier},
    error::OssifyResult,
};

/// Production tier scanner backed by `walkdir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTierScanner;

impl LocalTierScanner {
    pub fn new() -> Self {
        Self
    }
}

impl TierScanner for LocalTierScanner {
    #[instrument(skip_all, fields(tier = tier.name()))]
    fn scan(&self, tier: &TemplateTier) -> OssifyResult<Vec<TemplateEntry>> {
        let mut entries = Vec::new();

        for walk_entry in WalkDir::new(tier.path()).min_depth(1) {
            // The locator checked existence, but that check is racy by
            // nature; a vanished or unreadable tier surfaces here as a
            // first-class TierRead.
            let walk_entry = walk_entry.map_err(|e| ApplicationError::TierRead {
                path: tier.path().to_path_buf(),
                reason: e.to_string(),
            })?;

            if !walk_entry.file_type().is_file() {
                continue;
            }

            let relative = walk_entry.path().strip_prefix(tier.path()).map_err(|_| {
                ApplicationError::TierRead {
                    path: tier.path().to_path_buf(),
                    reason: format!(
                        "walked outside the tier: {}",
                        walk_entry.path().display()
                    ),
                }
            })?;

            match TemplateEntry::from_tier_relative(walk_entry.path(), relative) {
                Some(entry) => entries.push(entry),
                None => trace!(file = %relative.display(), "no template marker, skipping"),
            }
        }

        trace!(count = entries.len(), "tier scanned");
        Ok(entries)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn tier_with(files: &[(&str, &str)]) -> (TempDir, TemplateTier) {
        let temp = TempDir::new().unwrap();
        for (rel, content) in files {
            let full = temp.path().join(rel);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        let tier = TemplateTier::new("common", temp.path(), 0);
        (temp, tier)
    }

    #[test]
    fn marked_files_become_entries() {
        let (_temp, tier) = tier_with(&[("_LICENSE", "mit"), ("_README.md", "readme")]);
        let mut names: Vec<_> = LocalTierScanner::new()
            .scan(&tier)
            .unwrap()
            .into_iter()
            .map(|e| e.logical_name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["LICENSE", "README.md"]);
    }

    #[test]
    fn unmarked_files_are_ignored() {
        let (_temp, tier) = tier_with(&[("_LICENSE", "mit"), ("notes.txt", "not a template")]);
        let entries = LocalTierScanner::new().scan(&tier).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].logical_name(), "LICENSE");
    }

    #[test]
    fn nested_templates_keep_relative_structure() {
        let (_temp, tier) = tier_with(&[(".github/workflows/_ci.yml", "on: push")]);
        let entries = LocalTierScanner::new().scan(&tier).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].destination(), Path::new(".github/workflows/ci.yml"));
    }

    #[test]
    fn source_paths_are_absolute_within_the_tier() {
        let (temp, tier) = tier_with(&[("_LICENSE", "mit")]);
        let entries = LocalTierScanner::new().scan(&tier).unwrap();
        assert_eq!(entries[0].source_path(), temp.path().join("_LICENSE"));
    }

    #[test]
    fn vanished_tier_is_tier_read_error() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("was-here");
        let tier = TemplateTier::new("common", &gone, 0);
        // Directory never created: the advisory existence check has been
        // bypassed, exactly like a tier vanishing between check and scan.
        let err = LocalTierScanner::new().scan(&tier).unwrap_err();
        assert!(err.to_string().contains("failed to read template tier"), "err = {err}");
    }
}
