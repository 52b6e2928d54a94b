//! Project classification: which kind of open-source project is being set up.
//!
//! The classification selects the high-priority template tier; the `common`
//! tier applies to every classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The fixed set of project classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectClass {
    /// A reusable library published to a package registry.
    Library,
    /// A framework bundle/plugin.
    Bundle,
    /// A standalone application.
    Application,
}

impl ProjectClass {
    /// All classifications, in questionnaire display order.
    pub const ALL: [ProjectClass; 3] = [Self::Library, Self::Bundle, Self::Application];

    /// The template tier directory named after this classification.
    pub fn tier_name(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Bundle => "bundle",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for ProjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier_name())
    }
}

impl FromStr for ProjectClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "library" | "lib" => Ok(Self::Library),
            "bundle" => Ok(Self::Bundle),
            "application" | "app" => Ok(Self::Application),
            _ => Err(DomainError::InvalidClassification { value: s.into() }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Library".parse::<ProjectClass>().unwrap(), ProjectClass::Library);
        assert_eq!("BUNDLE".parse::<ProjectClass>().unwrap(), ProjectClass::Bundle);
        assert_eq!("app".parse::<ProjectClass>().unwrap(), ProjectClass::Application);
    }

    #[test]
    fn unknown_value_is_error() {
        assert!(matches!(
            "plugin".parse::<ProjectClass>(),
            Err(DomainError::InvalidClassification { .. })
        ));
    }

    #[test]
    fn tier_name_round_trips_through_display() {
        for class in ProjectClass::ALL {
            assert_eq!(class.to_string(), class.tier_name());
            assert_eq!(class.tier_name().parse::<ProjectClass>().unwrap(), class);
        }
    }
}
