//! Live adapter for the `HalPusher` port that runs the external push task.
//!
//! The task receives the application configuration as environment entries
//! (`HAL_USER_NAME`, `HAL_USER_PASS`, `SQLALCHEMY_DATABASE_URI`) and the
//! request as `--limit <n> --yield-amt <n>`. Its stdout streams straight to
//! ours; its stderr is carried in the error on a non-zero exit and relayed to
//! ours otherwise.

use crate::app::AppContext;
use crate::ports::push::{HalPusher, PushError, PushRequest};
use crate::ports::shell::{Invocation, ShellExecutor};

/// Pushes by running the configured push task program.
pub struct TaskPusher {
    shell: Box<dyn ShellExecutor>,
}

impl TaskPusher {
    /// Creates a pusher that runs the task through `shell`.
    #[must_use]
    pub fn new(shell: Box<dyn ShellExecutor>) -> Self {
        Self { shell }
    }
}

/// Builds the invocation for `request` under the configuration in `ctx`.
///
/// # Errors
///
/// Fails when the configured push command is empty.
pub fn invocation_for(ctx: &AppContext<'_>, request: PushRequest) -> Result<Invocation, PushError> {
    let config = ctx.config();
    let (program, leading) = config
        .push_command
        .split_first()
        .ok_or_else(|| PushError::Other("no push task program configured".into()))?;

    let mut invocation = Invocation::new(program.clone()).streaming_stdout();
    for arg in leading {
        invocation = invocation.arg(arg.clone());
    }
    invocation = invocation
        .arg("--limit")
        .arg(request.limit.to_string())
        .arg("--yield-amt")
        .arg(request.yield_amt.to_string());
    for (key, value) in config.overrides() {
        invocation = invocation.env(key, value);
    }
    Ok(invocation)
}

impl HalPusher for TaskPusher {
    fn push(&self, ctx: &AppContext<'_>, request: PushRequest) -> Result<(), PushError> {
        let invocation = invocation_for(ctx, request)?;
        tracing::info!(program = %invocation.program, args = ?invocation.args, "running push task");

        let output = self
            .shell
            .run(&invocation)
            .map_err(|source| PushError::Spawn { program: invocation.program.clone(), source })?;

        if let Some(signal) = output.signal {
            eprint!("{}", output.stderr);
            return Err(PushError::Killed { signal });
        }
        if output.exit_code != 0 {
            return Err(PushError::Failed {
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        if !output.stderr.is_empty() {
            eprint!("{}", output.stderr);
        }
        tracing::info!("push task finished");
        Ok(())
    }
}
