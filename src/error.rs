//! Error types surfaced by the `hal` CLI.

use std::error::Error as _;

use thiserror::Error;

use crate::ports::push::PushError;

/// Top-level failure of a `hal` command.
#[derive(Debug, Error)]
pub enum HalError {
    /// A required environment variable is unset.
    #[error("Environment variable '{name}' not set. Quitting.")]
    MissingEnv {
        /// Name of the missing variable.
        name: String,
    },

    /// Command-line parsing stopped, either on bad usage or on
    /// `--help`/`--version`.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// The push task did not complete.
    #[error("HAL push failed")]
    Push(#[from] PushError),
}

impl HalError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingEnv { .. } => 1,
            Self::Cli(err) => u8::try_from(err.exit_code()).unwrap_or(2),
            Self::Push(_) => 3,
        }
    }

    /// Renders the message shown to the user, including every cause.
    #[must_use]
    pub fn report(&self) -> String {
        match self {
            Self::MissingEnv { .. } => self.to_string(),
            Self::Cli(err) => err.render().to_string(),
            Self::Push(_) => {
                let mut out = format!("ERROR: {self}");
                let mut cause = self.source();
                while let Some(err) = cause {
                    out.push_str(": ");
                    out.push_str(&err.to_string());
                    cause = err.source();
                }
                out
            }
        }
    }
}
