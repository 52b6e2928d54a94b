//! Implementation of the `ossify completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Write a completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = "ossify";
    let mut out = io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, bin_name, &mut out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, bin_name, &mut out),
    }

    Ok(())
}
