//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

use ossify_core::domain::ProjectClass;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ossify",
    bin_name = "ossify",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Open-source project housekeeping scaffolder",
    long_about = "Ossify writes the housekeeping files every open-source \
                  repository needs (license, readme, CI config, package \
                  manifest), composed from layered template tiers and \
                  rendered with values derived from the repository's remote.",
    after_help = "EXAMPLES:\n\
        \x20 ossify setup --class library\n\
        \x20 ossify setup --class bundle --repository-url git@github.com:acme/widget.git\n\
        \x20 ossify plan  --class library --format json\n\
        \x20 ossify completions bash > /usr/share/bash-completion/completions/ossify",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the open-source housekeeping files into a working copy.
    #[command(
        visible_alias = "s",
        about = "Scaffold housekeeping files into the working directory",
        after_help = "EXAMPLES:\n\
            \x20 ossify setup --class library\n\
            \x20 ossify setup --class application --dir ../my-clone --yes\n\
            \x20 ossify setup --class bundle --repository-url https://github.com/acme/widget"
    )]
    Setup(SetupArgs),

    /// Show which template would win for each output file, without writing.
    #[command(
        about = "Preview the composed template plan",
        after_help = "EXAMPLES:\n\
            \x20 ossify plan --class library\n\
            \x20 ossify plan --class bundle --format json"
    )]
    Plan(PlanArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ossify completions bash > ~/.local/share/bash-completion/completions/ossify\n\
            \x20 ossify completions zsh  > ~/.zfunc/_ossify\n\
            \x20 ossify completions fish > ~/.config/fish/completions/ossify.fish"
    )]
    Completions(CompletionsArgs),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `ossify setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Project classification.  Prompted interactively when omitted.
    #[arg(
        short = 't',
        long = "class",
        value_name = "CLASS",
        value_enum,
        help = "Project classification"
    )]
    pub class: Option<Classification>,

    /// Repository URL.  Determined from the 'origin' remote when omitted.
    #[arg(
        long = "repository-url",
        value_name = "URL",
        help = "Repository URL (skips remote detection)"
    )]
    pub repository_url: Option<String>,

    /// Template root directory override.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template root containing one subdirectory per tier"
    )]
    pub templates: Option<PathBuf>,

    /// Working directory to scaffold into.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Working directory (a clone of the target repository)"
    )]
    pub dir: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and write immediately"
    )]
    pub yes: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `ossify plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Project classification.
    #[arg(
        short = 't',
        long = "class",
        value_name = "CLASS",
        value_enum,
        help = "Project classification"
    )]
    pub class: Option<Classification>,

    /// Template root directory override.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template root containing one subdirectory per tier"
    )]
    pub templates: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table.
    Table,
    /// JSON object keyed by destination.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ossify completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project classifications as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Classification {
    /// Also accepted as `lib`.
    #[value(alias = "lib")]
    Library,
    Bundle,
    /// Also accepted as `app`.
    #[value(alias = "app")]
    Application,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Bundle => write!(f, "bundle"),
            Self::Application => write!(f, "application"),
        }
    }
}

impl From<Classification> for ProjectClass {
    fn from(class: Classification) -> Self {
        match class {
            Classification::Library => ProjectClass::Library,
            Classification::Bundle => ProjectClass::Bundle,
            Classification::Application => ProjectClass::Application,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn classification_display() {
        assert_eq!(Classification::Library.to_string(), "library");
        assert_eq!(Classification::Bundle.to_string(), "bundle");
        assert_eq!(Classification::Application.to_string(), "application");
    }

    #[test]
    fn classification_converts_to_core() {
        assert_eq!(ProjectClass::from(Classification::Library), ProjectClass::Library);
        assert_eq!(ProjectClass::from(Classification::Bundle), ProjectClass::Bundle);
        assert_eq!(
            ProjectClass::from(Classification::Application),
            ProjectClass::Application
        );
    }

    #[test]
    fn parse_setup_command() {
        let cli = Cli::parse_from([
            "ossify",
            "setup",
            "--class",
            "library",
            "--repository-url",
            "git@github.com:acme/widget.git",
            "--yes",
        ]);
        assert!(matches!(cli.command, Commands::Setup(_)));
    }

    #[test]
    fn library_alias() {
        let cli = Cli::parse_from(["ossify", "setup", "-t", "lib", "--yes"]);
        if let Commands::Setup(args) = cli.command {
            assert_eq!(args.class, Some(Classification::Library));
        } else {
            panic!("expected Setup command");
        }
    }

    #[test]
    fn application_alias() {
        let cli = Cli::parse_from(["ossify", "plan", "-t", "app"]);
        if let Commands::Plan(args) = cli.command {
            assert_eq!(args.class, Some(Classification::Application));
        } else {
            panic!("expected Plan command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["ossify", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
