//! Built-in template tiers and template-root discovery.
//!
//! This module provides [`resolve_template_root`], the single entry-point
//! for locating the tier directories a scaffold run composes over. It
//! abstracts over the discovery strategy so callers do not need to know
//! where templates live on disk.
//!
//! # Template-root resolution order
//!
//! The root is searched in this priority order, stopping at the first
//! directory that exists:
//!
//! 1. **Explicit path** — the `--templates` flag or the config file.
//! 2. **`$OSSIFY_TEMPLATES_DIR`** — environment variable override. Set this
//!    in `.env` or your shell profile to point at a custom tier collection.
//! 3. **`./templates`** — relative to the current working directory.
//! 4. **Materialized defaults** — the embedded tier set written to the
//!    given fallback directory (the CLI passes its cache dir). This is what
//!    makes a fresh install work with zero setup.
//!
//! # Embedded tiers
//!
//! The defaults mirror the classic open-source housekeeping set: a `common`
//! tier (license, readme, CI config, gitignore, editorconfig) plus one tier
//! per classification carrying its package manifest. Template bodies use
//! `{{VARIABLE}}` placeholders resolved from the repository identity.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use ossify_core::{application::ApplicationError, error::OssifyResult};

/// One embedded template: (tier name, marked relative path, body).
type EmbeddedTemplate = (&'static str, &'static str, &'static str);

const EMBEDDED: &[EmbeddedTemplate] = &[
    (
        "common",
        "_LICENSE",
        "Copyright (c) {{YEAR}} {{ORGANIZATION}}\n\
         \n\
         Permission is hereby granted, free of charge, to any person obtaining a copy\n\
         of this software and associated documentation files (the \"Software\"), to deal\n\
         in the Software without restriction, including without limitation the rights\n\
         to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
         copies of the Software, and to permit persons to whom the Software is\n\
         furnished to do so, subject to the following conditions:\n\
         \n\
         The above copyright notice and this permission notice shall be included in\n\
         all copies or substantial portions of the Software.\n\
         \n\
         THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
         IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
         FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
         AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
         LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
         OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN\n\
         THE SOFTWARE.\n",
    ),
    (
        "common",
        "_README.md",
        "# {{PROJECT}}\n\
         \n\
         [![Build Status](https://travis-ci.org/{{ORGANIZATION}}/{{PROJECT}}.svg?branch=master)](https://travis-ci.org/{{ORGANIZATION}}/{{PROJECT}})\n\
         \n\
         ## Installation\n\
         \n\
         ## Usage\n\
         \n\
         ## Credits, Copyright and License\n\
         \n\
         Copyright {{YEAR}} {{ORGANIZATION}}. Code released under [the MIT license](LICENSE).\n",
    ),
    (
        "common",
        "_.travis.yml",
        "language: php\n\
         \n\
         php:\n\
         \x20 - 7.4\n\
         \x20 - 8.0\n\
         \n\
         install: composer install\n\
         script: vendor/bin/phpunit\n",
    ),
    (
        "common",
        "_.gitignore",
        "/vendor/\n\
         composer.lock\n\
         .phpunit.result.cache\n",
    ),
    (
        "common",
        "_.editorconfig",
        "root = true\n\
         \n\
         [*]\n\
         charset = utf-8\n\
         end_of_line = lf\n\
         indent_size = 4\n\
         indent_style = space\n\
         insert_final_newline = true\n\
         trim_trailing_whitespace = true\n",
    ),
    (
        "library",
        "_composer.json",
        "{\n\
         \x20   \"name\": \"{{PACKAGE_NAME}}\",\n\
         \x20   \"type\": \"library\",\n\
         \x20   \"license\": \"MIT\",\n\
         \x20   \"require\": {},\n\
         \x20   \"require-dev\": {\n\
         \x20       \"phpunit/phpunit\": \"^9.0\"\n\
         \x20   }\n\
         }\n",
    ),
    (
        "library",
        "_phpunit.xml.dist",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <phpunit bootstrap=\"vendor/autoload.php\" colors=\"true\">\n\
         \x20   <testsuites>\n\
         \x20       <testsuite name=\"{{PROJECT}}\">\n\
         \x20           <directory>tests</directory>\n\
         \x20       </testsuite>\n\
         \x20   </testsuites>\n\
         </phpunit>\n",
    ),
    (
        "bundle",
        "_composer.json",
        "{\n\
         \x20   \"name\": \"{{PACKAGE_NAME}}\",\n\
         \x20   \"type\": \"symfony-bundle\",\n\
         \x20   \"license\": \"MIT\",\n\
         \x20   \"require\": {},\n\
         \x20   \"require-dev\": {\n\
         \x20       \"phpunit/phpunit\": \"^9.0\"\n\
         \x20   }\n\
         }\n",
    ),
    (
        "application",
        "_composer.json",
        "{\n\
         \x20   \"name\": \"{{PACKAGE_NAME}}\",\n\
         \x20   \"type\": \"project\",\n\
         \x20   \"license\": \"MIT\",\n\
         \x20   \"require\": {}\n\
         }\n",
    ),
];

/// Locate the template root for a run.
///
/// See the module docs for the resolution order. When every other candidate
/// misses, the embedded defaults are written under `fallback_dir/templates`
/// and that directory is returned; a fresh install needs no setup.
#[instrument(skip_all)]
pub fn resolve_template_root(
    explicit: Option<&Path>,
    fallback_dir: &Path,
) -> OssifyResult<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit template root");
        return Ok(path.to_path_buf());
    }

    if let Ok(env_root) = std::env::var("OSSIFY_TEMPLATES_DIR") {
        debug!(path = %env_root, "using OSSIFY_TEMPLATES_DIR");
        return Ok(PathBuf::from(env_root));
    }

    let cwd_templates = PathBuf::from("templates");
    if cwd_templates.is_dir() {
        debug!("using ./templates");
        return Ok(cwd_templates);
    }

    let root = fallback_dir.join("templates");
    materialize(&root)?;
    info!(path = %root.display(), "materialized embedded default tiers");
    Ok(root)
}

/// Write the embedded tier set under `root`, overwriting stale copies so the
/// materialized tree always matches this binary.
pub fn materialize(root: &Path) -> OssifyResult<()> {
    for (tier, rel, body) in EMBEDDED {
        let path = root.join(tier).join(rel);
        let parent = path.parent().expect("embedded paths have a tier parent");
        std::fs::create_dir_all(parent).map_err(|e| ApplicationError::Filesystem {
            path: parent.to_path_buf(),
            reason: format!("Failed to create directory: {e}"),
        })?;
        std::fs::write(&path, body).map_err(|e| ApplicationError::Filesystem {
            path: path.clone(),
            reason: format!("Failed to write embedded template: {e}"),
        })?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
