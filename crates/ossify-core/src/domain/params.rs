//! Render parameters: the fixed set of named values substituted into every
//! template in a single run.
//!
//! Built once from the resolved [`RepositoryIdentity`], immutable, and
//! shared by reference across all render calls. No per-template mutation.
//!
//! ## Built-in Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `ORGANIZATION` | "WebFactory" | remote URL (case-preserving) |
//! | `PROJECT` | "GeneratorProject" | remote URL (case-preserving) |
//! | `ORGANIZATION_KEBAB` | "web-factory" | computed |
//! | `PROJECT_KEBAB` | "generator-project" | computed |
//! | `PACKAGE_NAME` | "web-factory/generator-project" | computed |
//! | `YEAR` | "2026" | supplied by the caller |

use std::collections::HashMap;

use super::identity::RepositoryIdentity;

/// Immutable variable map for template substitution.
#[derive(Debug, Clone)]
pub struct RenderParameters {
    values: HashMap<String, String>,
}

impl RenderParameters {
    /// Build the parameter set for one scaffold run.
    ///
    /// All derivations happen once at construction; rendering is then a
    /// plain scan-and-replace per template. The year is passed in rather
    /// than read from a clock so the core stays deterministic.
    pub fn new(identity: &RepositoryIdentity, year: i32) -> Self {
        let org_kebab = to_kebab_case(identity.organization());
        let project_kebab = to_kebab_case(identity.project());

        let mut values = HashMap::new();
        values.insert("ORGANIZATION".to_string(), identity.organization().to_string());
        values.insert("PROJECT".to_string(), identity.project().to_string());
        values.insert("YEAR".to_string(), year.to_string());
        values.insert(
            "PACKAGE_NAME".to_string(),
            format!("{org_kebab}/{project_kebab}"),
        );
        values.insert("ORGANIZATION_KEBAB".to_string(), org_kebab);
        values.insert("PROJECT_KEBAB".to_string(), project_kebab);

        Self { values }
    }

    /// Add a custom value, consuming self and returning a new set.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Substitute `{{VARIABLE}}` placeholders in a template body.
    ///
    /// Single-pass replacement; order doesn't matter for independent
    /// variables. Placeholders this set does not know are left untouched;
    /// the renderer detects them afterwards via [`Self::first_unresolved`]
    /// and fails the file rather than writing garbled output.
    pub fn substitute(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.values {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// The first surviving `{{…}}` placeholder in rendered output, if any.
    ///
    /// An unresolved placeholder is a template-authoring error, not
    /// something substitution corrects.
    pub fn first_unresolved(rendered: &str) -> Option<&str> {
        let start = rendered.find("{{")?;
        let end = rendered[start..].find("}}")?;
        Some(&rendered[start + 2..start + end])
    }
}

// ── String case conversion ────────────────────────────────────────────────────

/// Convert an identifier to kebab-case: split on word boundaries, join with
/// `-`, lowercase. `WebFactory` → `web-factory`, `my_repo` → `my-repo`.
fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Split a string into words based on casing and separators.
///
/// Boundaries:
/// 1. Explicit separators `_`, `-`, whitespace
/// 2. camelCase transition (`aB`)
/// 3. Acronym boundary (`HTTPServer` → `HTTP` + `Server`)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym boundary: Upper, next Upper, next+1 Lower.
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

// ── Tests ─────────────────────────────────────────────────────────────────────
