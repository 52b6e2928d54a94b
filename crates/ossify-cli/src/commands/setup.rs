//! Implementation of the `ossify setup` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call
//! the core scaffold service, and display results. No business logic lives
//! here.

use std::path::PathBuf;

use chrono::Datelike;
use tracing::{debug, info, instrument};

use ossify_adapters::{GitRemoteConfig, LocalFilesystem, LocalTierScanner, builtin_templates};
use ossify_core::{
    application::{ScaffoldReport, ScaffoldRequest, ScaffoldService},
    domain::ProjectClass,
};

use crate::{
    cli::{SetupArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `ossify setup` command.
///
/// Dispatch sequence:
/// 1. Resolve the classification (flag → config default → questionnaire)
/// 2. Resolve the template root
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print the dependency-install hint for any manifests produced
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Classification
    let class = resolve_classification(args.class.map(Into::into), &config, &global)?;

    // 2. Template root
    let explicit_root = args
        .templates
        .clone()
        .or_else(|| config.templates.local_path.clone());
    let template_root =
        builtin_templates::resolve_template_root(explicit_root.as_deref(), &AppConfig::cache_dir())
            .map_err(CliError::Core)?;

    debug!(
        class = %class,
        template_root = %template_root.display(),
        explicit_url = args.repository_url.as_deref().unwrap_or("(detect)"),
        "setup resolved"
    );

    let request = ScaffoldRequest {
        workdir: args.dir.clone(),
        class,
        template_root,
        explicit_url: args.repository_url.clone(),
        year: chrono::Utc::now().year(),
    };

    let service = ScaffoldService::new(
        Box::new(GitRemoteConfig::new()),
        Box::new(LocalTierScanner::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&request, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: resolve and compose, but write nothing.
    if args.dry_run {
        let identity = service
            .resolve_identity(request.explicit_url.as_deref(), &request.workdir)
            .map_err(CliError::Core)?;
        let plan = service
            .plan(request.class, &request.template_root)
            .map_err(CliError::Core)?;

        output.info(&format!(
            "Dry run: would write {} file(s) for {} into {}",
            plan.len(),
            identity,
            request.workdir.display(),
        ))?;
        for (destination, entry) in plan.iter() {
            output.print(&format!(
                "  {}  <-  {}",
                destination.display(),
                entry.source_path().display()
            ))?;
        }
        return Ok(());
    }

    // 5. Scaffold
    output.header("Setting up open-source housekeeping files...")?;
    info!(class = %request.class, "scaffold started");

    let report = service.scaffold(&request).map_err(CliError::Core)?;

    info!(files = report.written.len(), "scaffold completed");

    // 6. Success + install hint
    output.success(&format!(
        "Wrote {} file(s) for {}",
        report.written.len(),
        report.identity,
    ))?;

    if !global.quiet {
        for path in &report.written {
            output.print(&format!("  {}", path.display()))?;
        }
        print_install_hint(&report, &output)?;
    }

    Ok(())
}

// ── Classification resolution ─────────────────────────────────────────────────

/// Pick the classification: explicit flag, then the config default, then the
/// interactive questionnaire. Never a silent guess.
fn resolve_classification(
    flag: Option<ProjectClass>,
    config: &AppConfig,
    global: &GlobalArgs,
) -> CliResult<ProjectClass> {
    if let Some(class) = flag {
        return Ok(class);
    }

    if let Some(value) = &config.defaults.class {
        return value.parse().map_err(|e| CliError::ConfigError {
            message: format!("defaults.class: {e}"),
            source: None,
        });
    }

    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal;
        if !global.quiet && std::io::stdin().is_terminal() {
            return prompt_classification();
        }
    }
    #[cfg(not(feature = "interactive"))]
    let _ = global;

    Err(CliError::MissingClassification)
}

/// The questionnaire: a single select over the fixed classification set.
/// Runs before tier locating: the answer drives which tiers compose.
#[cfg(feature = "interactive")]
fn prompt_classification() -> CliResult<ProjectClass> {
    use dialoguer::Select;

    let items: Vec<&str> = ProjectClass::ALL.iter().map(|c| c.tier_name()).collect();
    let index = Select::new()
        .with_prompt("What kind of project is this?")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("classification prompt failed: {e}"),
            source: None,
        })?;

    Ok(ProjectClass::ALL[index])
}

// ── Install hint ──────────────────────────────────────────────────────────────

/// Post-render collaborator: suggest the dependency-install command matching
/// whichever manifest files the run actually produced.
fn print_install_hint(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    let hints = install_hints(&report.written);
    if !hints.is_empty() {
        output.print("")?;
        output.print("Next steps:")?;
        for hint in hints {
            output.print(&format!("  {hint}"))?;
        }
    }

    Ok(())
}

/// Which install commands apply, given the destinations a run wrote.
fn install_hints(written: &[PathBuf]) -> Vec<&'static str> {
    const MANIFEST_HINTS: [(&str, &str); 2] = [
        ("composer.json", "composer install"),
        ("package.json", "npm install"),
    ];

    MANIFEST_HINTS
        .iter()
        .filter(|(manifest, _)| {
            written
                .iter()
                .any(|p| p.file_name().is_some_and(|n| n == *manifest))
        })
        .map(|(_, hint)| *hint)
        .collect()
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Classification: {}", request.class))?;
    out.print(&format!("  Directory:      {}", request.workdir.display()))?;
    out.print(&format!(
        "  Templates:      {}",
        request.template_root.display()
    ))?;
    out.print(&format!(
        "  Repository:     {}",
        request.explicit_url.as_deref().unwrap_or("(from 'origin' remote)")
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
