//! Implementation of the `ossify plan` command.
//!
//! Locates tiers, discovers templates, and composes, then prints which
//! source template wins for every destination, without resolving the
//! repository identity or writing anything.

use tracing::instrument;

use ossify_adapters::{GitRemoteConfig, LocalFilesystem, LocalTierScanner, builtin_templates};
use ossify_core::application::ScaffoldService;

use crate::{
    cli::{PlanArgs, PlanFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `ossify plan` command.
#[instrument(skip_all)]
pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Plan output is usually piped, so no questionnaire here: the
    // classification comes from the flag or the config default only.
    let class = match args.class {
        Some(class) => class.into(),
        None => match &config.defaults.class {
            Some(value) => value.parse().map_err(|e| CliError::ConfigError {
                message: format!("defaults.class: {e}"),
                source: None,
            })?,
            None => return Err(CliError::MissingClassification),
        },
    };

    let explicit_root = args
        .templates
        .clone()
        .or_else(|| config.templates.local_path.clone());
    let template_root =
        builtin_templates::resolve_template_root(explicit_root.as_deref(), &AppConfig::cache_dir())
            .map_err(CliError::Core)?;

    let service = ScaffoldService::new(
        Box::new(GitRemoteConfig::new()),
        Box::new(LocalTierScanner::new()),
        Box::new(LocalFilesystem::new()),
    );

    let plan = service.plan(class, &template_root).map_err(CliError::Core)?;

    match args.format {
        PlanFormat::Table => {
            output.header(&format!("Plan for '{class}' ({} file(s))", plan.len()))?;
            for (destination, entry) in plan.iter() {
                output.print(&format!(
                    "  {}  <-  {}",
                    destination.display(),
                    entry.source_path().display()
                ))?;
            }
        }
        PlanFormat::Json => {
            // Machine output bypasses the OutputManager so --quiet cannot
            // swallow it.
            let map: serde_json::Map<String, serde_json::Value> = plan
                .iter()
                .map(|(destination, entry)| {
                    (
                        destination.display().to_string(),
                        serde_json::json!({
                            "source": entry.source_path().display().to_string(),
                            "logical_name": entry.logical_name(),
                        }),
                    )
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(map))
                    .expect("plan serialization cannot fail")
            );
        }
    }

    Ok(())
}
