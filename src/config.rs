//! Configuration resolved from the process environment.
//!
//! Every required variable is looked up once, in a fixed order, and the
//! first missing one aborts resolution. Nothing here touches the network or
//! the database.

use std::fmt;

use crate::error::HalError;
use crate::ports::env::Environment;

/// HAL QA account name, used with `--preprod`.
pub const QA_HAL_USER_NAME: &str = "QA_HAL_USER_NAME";
/// HAL QA account password, used with `--preprod`.
pub const QA_HAL_USER_PASS: &str = "QA_HAL_USER_PASS";
/// HAL production account name.
pub const PROD_HAL_USER_NAME: &str = "PROD_HAL_USER_NAME";
/// HAL production account password.
pub const PROD_HAL_USER_PASS: &str = "PROD_HAL_USER_PASS";
/// Host of the INSPIRE database replica.
pub const PROD_DB_REPLICA: &str = "PROD_DB_REPLICA";
/// Database user.
pub const PROD_DB_INSPIRE_USER: &str = "PROD_DB_INSPIRE_USER";
/// Database password.
pub const PROD_DB_INSPIRE_PASSWORD: &str = "PROD_DB_INSPIRE_PASSWORD";
/// Database port.
pub const PROD_DB_PORT: &str = "PROD_DB_PORT";
/// Optional override for the push task program.
pub const HAL_PUSH_COMMAND: &str = "HAL_PUSH_COMMAND";

/// Program run when `HAL_PUSH_COMMAND` is unset.
pub const DEFAULT_PUSH_COMMAND: &str = "inspire-hal-push";

/// Which HAL deployment receives the push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalTarget {
    /// HAL QA/staging.
    Preprod,
    /// HAL production.
    #[default]
    Prod,
}

impl HalTarget {
    /// Names of the (user, password) variables for this target.
    #[must_use]
    pub fn credential_vars(self) -> (&'static str, &'static str) {
        match self {
            Self::Preprod => (QA_HAL_USER_NAME, QA_HAL_USER_PASS),
            Self::Prod => (PROD_HAL_USER_NAME, PROD_HAL_USER_PASS),
        }
    }
}

impl fmt::Display for HalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preprod => f.write_str("preprod"),
            Self::Prod => f.write_str("prod"),
        }
    }
}

/// A string that never shows up in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a sensitive value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Connection parameters for the INSPIRE database replica.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// Replica host name.
    pub host: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: Secret,
    /// Port, kept as given.
    pub port: String,
}

impl DatabaseSettings {
    /// `SQLAlchemy` URI for the `inspirehep` database.
    ///
    /// Values are interpolated verbatim, so credentials containing `@`, `:`
    /// or `/` produce an unusable URI.
    #[must_use]
    pub fn uri(&self) -> Secret {
        Secret(format!(
            "postgresql+psycopg2://{}:{}@{}:{}/inspirehep",
            self.user,
            self.password.expose(),
            self.host,
            self.port
        ))
    }

    /// The URI with the password masked, for logging.
    #[must_use]
    pub fn redacted_uri(&self) -> String {
        format!("postgresql+psycopg2://{}:***@{}:{}/inspirehep", self.user, self.host, self.port)
    }
}

/// Everything the application factory needs, resolved once per run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Selected HAL deployment.
    pub target: HalTarget,
    /// HAL account name.
    pub hal_user_name: String,
    /// HAL account password.
    pub hal_user_pass: Secret,
    /// Database connection parameters.
    pub database: DatabaseSettings,
    /// Push task program followed by its leading arguments.
    pub push_command: Vec<String>,
}

impl AppConfig {
    /// Resolves the configuration for `target` from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingEnv`] naming the first required variable
    /// that is unset.
    pub fn from_env(env: &dyn Environment, target: HalTarget) -> Result<Self, HalError> {
        let (user_var, pass_var) = target.credential_vars();
        let hal_user_name = require_var(env, user_var)?;
        let hal_user_pass = Secret(require_var(env, pass_var)?);

        let host = require_var(env, PROD_DB_REPLICA)?;
        let user = require_var(env, PROD_DB_INSPIRE_USER)?;
        let password = Secret(require_var(env, PROD_DB_INSPIRE_PASSWORD)?);
        let port = require_var(env, PROD_DB_PORT)?;

        let push_command = parse_push_command(env.var(HAL_PUSH_COMMAND).as_deref());

        Ok(Self {
            target,
            hal_user_name,
            hal_user_pass,
            database: DatabaseSettings { host, user, password, port },
            push_command,
        })
    }

    /// Named configuration overrides handed to the push task.
    #[must_use]
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        vec![
            ("HAL_USER_NAME", self.hal_user_name.clone()),
            ("HAL_USER_PASS", self.hal_user_pass.expose().to_string()),
            ("SQLALCHEMY_DATABASE_URI", self.database.uri().expose().to_string()),
        ]
    }
}

/// Returns the value of `name`, or a [`HalError::MissingEnv`] naming it.
///
/// # Errors
///
/// Fails when the variable is unset.
pub fn require_var(env: &dyn Environment, name: &str) -> Result<String, HalError> {
    match env.var(name) {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(variable = name, "required variable missing");
            Err(HalError::MissingEnv { name: name.to_string() })
        }
    }
}

fn parse_push_command(raw: Option<&str>) -> Vec<String> {
    let parts: Vec<String> =
        raw.unwrap_or_default().split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        vec![DEFAULT_PUSH_COMMAND.to_string()]
    } else {
        parts
    }
}
