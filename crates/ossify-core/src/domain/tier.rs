//! Template tiers and the entries discovered inside them.
//!
//! A tier is one prioritized template source directory. Tiers combine by
//! override (later tier wins per destination), never by merging file
//! contents; see [`crate::domain::CompositionResult`].

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Marker prefix that identifies a file inside a tier as a template.
///
/// `_LICENSE` renders to `LICENSE`; `_.gitignore` renders to `.gitignore`.
/// Files without the marker are ignored by discovery.
pub const TEMPLATE_MARKER: char = '_';

/// Name of the tier that applies to every classification.
pub const COMMON_TIER: &str = "common";

/// One prioritized template source directory.
///
/// Computed once per scaffold run from the project classification and
/// immutable thereafter. `rank` is the position in the ordered tier list;
/// a higher rank overrides a lower one on destination collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTier {
    name: String,
    path: PathBuf,
    rank: usize,
}

impl TemplateTier {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, rank: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            rank,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// One discovered template file.
///
/// `logical_name` is the tier-relative path with the marker stripped from
/// the file name, normalized to forward slashes. It is stable across tiers:
/// two tiers offering the same logical name is exactly what triggers an
/// override during composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    source_path: PathBuf,
    logical_name: String,
    destination: PathBuf,
}

impl TemplateEntry {
    /// Build an entry from an absolute source path and its path relative to
    /// the tier root.
    ///
    /// Returns `None` when the file name does not carry the template marker
    /// (such files are not templates and are skipped by discovery), or when
    /// stripping the marker would leave an empty name.
    pub fn from_tier_relative(source_path: impl Into<PathBuf>, relative: &Path) -> Option<Self> {
        let file_name = relative.file_name()?.to_str()?;
        let stripped = file_name.strip_prefix(TEMPLATE_MARKER)?;
        if stripped.is_empty() {
            return None;
        }

        let destination = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(stripped),
            _ => PathBuf::from(stripped),
        };
        let logical_name = normalize(&destination);

        Some(Self {
            source_path: source_path.into(),
            logical_name,
            destination,
        })
    }

    /// Absolute location of the template file within its tier.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Tier-independent identity; the override key.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Output location, relative to the working directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Normalize a relative path to forward slashes so Windows and Unix tiers
/// produce identical logical names.
fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_stripped_from_file_name() {
        let entry =
            TemplateEntry::from_tier_relative("/t/common/_LICENSE", Path::new("_LICENSE")).unwrap();
        assert_eq!(entry.logical_name(), "LICENSE");
        assert_eq!(entry.destination(), Path::new("LICENSE"));
    }

    #[test]
    fn dotfile_templates_work() {
        let entry =
            TemplateEntry::from_tier_relative("/t/common/_.gitignore", Path::new("_.gitignore"))
                .unwrap();
        assert_eq!(entry.destination(), Path::new(".gitignore"));
    }

    #[test]
    fn nested_templates_preserve_relative_structure() {
        let entry = TemplateEntry::from_tier_relative(
            "/t/common/.github/workflows/_ci.yml",
            Path::new(".github/workflows/_ci.yml"),
        )
        .unwrap();
        assert_eq!(entry.logical_name(), ".github/workflows/ci.yml");
        assert_eq!(entry.destination(), Path::new(".github/workflows/ci.yml"));
    }

    #[test]
    fn unmarked_files_are_not_templates() {
        assert!(TemplateEntry::from_tier_relative("/t/common/notes.md", Path::new("notes.md"))
            .is_none());
    }

    #[test]
    fn bare_marker_is_not_a_template() {
        assert!(TemplateEntry::from_tier_relative("/t/common/_", Path::new("_")).is_none());
    }

    #[test]
    fn logical_name_is_stable_across_tiers() {
        let a = TemplateEntry::from_tier_relative("/t/common/_README.md", Path::new("_README.md"))
            .unwrap();
        let b = TemplateEntry::from_tier_relative("/t/library/_README.md", Path::new("_README.md"))
            .unwrap();
        assert_eq!(a.logical_name(), b.logical_name());
        assert_ne!(a.source_path(), b.source_path());
    }
}
