//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    // The completion script names the binary after the top-level command,
    // so renaming it in one place keeps the scripts in sync.
    let bin_name = cmd.get_name().to_string();
    generate(generator(args.shell), &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}

/// Map our CLI-facing shell enum onto clap_complete's generator.
fn generator(shell: Shell) -> clap_complete::Shell {
    match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
