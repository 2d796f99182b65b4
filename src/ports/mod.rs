//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the CLI core and the outside
//! world (process environment, child processes, the HAL push task).
//! Implementations live in `src/adapters/`.

pub mod env;
pub mod push;
pub mod shell;

pub use env::Environment;
pub use push::{HalPusher, PushError, PushRequest};
pub use shell::{Invocation, ShellExecutor, ShellOutput};
