//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::config::HalTarget;

/// Top-level CLI parser for `hal`.
#[derive(Debug, Parser)]
#[command(name = "hal", version, about = "CLI for pushing to HAL")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Push to HAL api.
    ///
    /// By default the push is done to the HAL production environment.
    /// If the --preprod flag is specified, the staging environment will be used.
    Push(PushArgs),
}

/// Flags of `hal push`.
#[derive(Debug, Args)]
pub struct PushArgs {
    /// Push to the HAL QA environment.
    #[arg(long, conflicts_with = "prod")]
    pub preprod: bool,
    /// Push to the HAL production environment (default).
    #[arg(long)]
    pub prod: bool,
}

impl PushArgs {
    /// The HAL deployment selected by the flags.
    #[must_use]
    pub fn target(&self) -> HalTarget {
        if self.preprod {
            HalTarget::Preprod
        } else {
            HalTarget::Prod
        }
    }
}
