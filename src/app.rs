//! Application factory and its scoped context.

use crate::config::AppConfig;

/// A configured application, built once per run by [`create_app`].
#[derive(Debug)]
pub struct App {
    config: AppConfig,
}

/// Builds the application from a resolved configuration.
#[must_use]
pub fn create_app(config: AppConfig) -> App {
    tracing::debug!(
        target_env = %config.target,
        hal_user = %config.hal_user_name,
        database = %config.database.redacted_uri(),
        "application created"
    );
    App { config }
}

impl App {
    /// The configuration this application was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Enters the application context. It is left when the guard drops.
    #[must_use]
    pub fn app_context(&self) -> AppContext<'_> {
        tracing::debug!("entering application context");
        AppContext { app: self }
    }
}

/// Scoped access to a running [`App`].
#[derive(Debug)]
pub struct AppContext<'a> {
    app: &'a App,
}

impl AppContext<'_> {
    /// The configuration of the enclosing application.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.app.config
    }
}

impl Drop for AppContext<'_> {
    fn drop(&mut self) {
        tracing::debug!("leaving application context");
    }
}
