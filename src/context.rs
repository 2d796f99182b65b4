//! Service context bundling the port trait objects.

use crate::ports::env::Environment;
use crate::ports::push::HalPusher;

/// Bundles the port trait objects a command needs.
///
/// Constructors wire up different adapter implementations; tests build
/// the struct directly with fakes.
pub struct ServiceContext {
    /// Source of configuration variables.
    pub env: Box<dyn Environment>,
    /// Bulk push to HAL.
    pub pusher: Box<dyn HalPusher>,
}

impl ServiceContext {
    /// Creates a live context: process environment (seeded from `.env`) and
    /// the push task run as a child process.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::env::ProcessEnvironment;
        use crate::adapters::live::push::TaskPusher;
        use crate::adapters::live::shell::LiveShellExecutor;

        Self {
            env: Box::new(ProcessEnvironment::load()),
            pusher: Box::new(TaskPusher::new(Box::new(LiveShellExecutor))),
        }
    }
}
