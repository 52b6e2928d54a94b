//! Tier composition: exactly one winning template per destination path.
//!
//! The override law is an explicit ordered fold: tiers are processed lowest
//! priority first and each entry overwrites any previous mapping for the
//! same destination. Last writer wins, for any number of tiers, at
//! whole-file granularity; entries are never merged field-by-field.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::tier::TemplateEntry;

/// Mapping from destination path to the single winning [`TemplateEntry`].
///
/// Invariant: exactly one entry per distinct destination. Iteration order is
/// sorted by destination (`BTreeMap`), so downstream rendering and reports
/// are deterministic regardless of discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionResult {
    winners: BTreeMap<PathBuf, TemplateEntry>,
}

impl CompositionResult {
    /// Fold per-tier entry lists, supplied in priority order (lowest first),
    /// into the final destination mapping.
    ///
    /// A pure function of tier order and discovered entries: composing the
    /// same input twice yields an identical result. A tier contributing zero
    /// entries does not affect the outcome.
    pub fn compose<I>(tiers_low_to_high: I) -> Self
    where
        I: IntoIterator<Item = Vec<TemplateEntry>>,
    {
        let mut winners = BTreeMap::new();
        for entries in tiers_low_to_high {
            for entry in entries {
                // Later (higher-priority) tiers overwrite earlier ones.
                winners.insert(entry.destination().to_path_buf(), entry);
            }
        }
        Self { winners }
    }

    pub fn get(&self, destination: &Path) -> Option<&TemplateEntry> {
        self.winners.get(destination)
    }

    /// Winning entries, sorted by destination.
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &TemplateEntry)> {
        self.winners.iter()
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(tier: &str, name: &str) -> TemplateEntry {
        let marked = format!("_{name}");
        TemplateEntry::from_tier_relative(format!("/templates/{tier}/{marked}"), Path::new(&marked))
            .unwrap()
    }

    #[test]
    fn highest_priority_tier_wins_on_collision() {
        let common = vec![entry("common", "README.md"), entry("common", "LICENSE")];
        let library = vec![entry("library", "README.md"), entry("library", "composer.json")];

        let result = CompositionResult::compose([common, library]);

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.get(Path::new("README.md")).unwrap().source_path(),
            Path::new("/templates/library/_README.md")
        );
        assert_eq!(
            result.get(Path::new("LICENSE")).unwrap().source_path(),
            Path::new("/templates/common/_LICENSE")
        );
        assert_eq!(
            result.get(Path::new("composer.json")).unwrap().source_path(),
            Path::new("/templates/library/_composer.json")
        );
    }

    #[test]
    fn override_generalizes_beyond_two_tiers() {
        let tiers = vec![
            vec![entry("a", "x.txt")],
            vec![entry("b", "x.txt")],
            vec![entry("c", "x.txt")],
        ];
        let result = CompositionResult::compose(tiers);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get(Path::new("x.txt")).unwrap().source_path(),
            Path::new("/templates/c/_x.txt")
        );
    }

    #[test]
    fn single_tier_entries_flow_through_unchanged() {
        let result = CompositionResult::compose([vec![entry("common", "LICENSE")]]);
        assert_eq!(result.len(), 1);
        assert!(result.get(Path::new("LICENSE")).is_some());
    }

    #[test]
    fn empty_tier_does_not_affect_result() {
        let with_empty = CompositionResult::compose([
            vec![entry("common", "LICENSE")],
            vec![],
        ]);
        let without = CompositionResult::compose([vec![entry("common", "LICENSE")]]);
        assert_eq!(with_empty, without);
    }

    #[test]
    fn composition_is_idempotent() {
        let tiers = || {
            vec![
                vec![entry("common", "README.md"), entry("common", "LICENSE")],
                vec![entry("library", "README.md")],
            ]
        };
        assert_eq!(
            CompositionResult::compose(tiers()),
            CompositionResult::compose(tiers())
        );
    }

    #[test]
    fn iteration_is_sorted_by_destination() {
        let result = CompositionResult::compose([vec![
            entry("common", "zz.txt"),
            entry("common", "aa.txt"),
            entry("common", "mm.txt"),
        ]]);
        let order: Vec<_> = result.iter().map(|(d, _)| d.clone()).collect();
        assert_eq!(
            order,
            vec![
                PathBuf::from("aa.txt"),
                PathBuf::from("mm.txt"),
                PathBuf::from("zz.txt")
            ]
        );
    }
}
