//! Live shell executor using `std::process::Command`.

use std::process::{Command, ExitStatus, Stdio};

use crate::ports::shell::{Invocation, ShellExecutor, ShellOutput};

/// Runs programs directly, without an intermediate shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(
        &self,
        invocation: &Invocation,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let stdout = if invocation.stream_stdout { Stdio::inherit() } else { Stdio::piped() };
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .spawn()?
            .wait_with_output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            signal: terminating_signal(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}
