//! Shell executor port for running external programs.

/// A program to run, with its arguments and extra environment entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path, resolved through `PATH`.
    pub program: String,
    /// Arguments passed after the program name.
    pub args: Vec<String>,
    /// Environment entries added on top of the inherited environment.
    pub envs: Vec<(String, String)>,
    /// Let the program write straight to our stdout instead of capturing it.
    pub stream_stdout: bool,
}

impl Invocation {
    /// Creates an invocation of `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), ..Self::default() }
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds an environment entry.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Streams the program's stdout as it runs; [`ShellOutput::stdout`] stays empty.
    #[must_use]
    pub fn streaming_stdout(mut self) -> Self {
        self.stream_stdout = true;
        self
    }
}

/// The output of a finished process.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// The exit code of the process, `-1` when it has none.
    pub exit_code: i32,
    /// The signal that terminated the process, if any.
    pub signal: Option<i32>,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

/// Executes external programs.
pub trait ShellExecutor: Send + Sync {
    /// Runs the invocation to completion and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    fn run(
        &self,
        invocation: &Invocation,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
