//! Live environment backed by the process environment.

use crate::ports::env::Environment;

/// Reads variables from the process environment.
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Seeds the process environment from a `.env` file, if one is found,
    /// and returns the live adapter. Variables already set take precedence.
    #[must_use]
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
        }
        Self
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
