//! Push port for the bulk HAL synchronization task.

use thiserror::Error;

use crate::app::AppContext;

/// Parameters handed to the push task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushRequest {
    /// Maximum number of records processed per invocation.
    pub limit: u32,
    /// Batch size used while streaming records out of the database.
    pub yield_amt: u32,
}

impl PushRequest {
    /// The parameters `hal push` always uses.
    pub const DEFAULT: Self = Self { limit: 10, yield_amt: 100 };
}

/// Errors reported by a [`HalPusher`].
#[derive(Debug, Error)]
pub enum PushError {
    /// The push task could not be started at all.
    #[error("could not start push task `{program}`")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The push task ran and reported failure.
    #[error("push task exited with status {exit_code}: {stderr}")]
    Failed {
        /// Exit status of the task.
        exit_code: i32,
        /// Trimmed standard error of the task.
        stderr: String,
    },

    /// The push task was terminated by a signal.
    #[error("push task was killed by signal {signal}")]
    Killed {
        /// Terminating signal number.
        signal: i32,
    },

    /// Any other adapter-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Sends local records to HAL.
pub trait HalPusher: Send + Sync {
    /// Pushes records using the configuration held by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns a [`PushError`] describing why the push did not complete.
    fn push(&self, ctx: &AppContext<'_>, request: PushRequest) -> Result<(), PushError>;
}
