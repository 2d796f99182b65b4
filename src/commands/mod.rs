//! Command dispatch and handlers.

pub mod push;

use crate::cli::Command;
use crate::error::HalError;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns the [`HalError`] of the selected command handler.
pub fn dispatch(command: &Command) -> Result<(), HalError> {
    match command {
        Command::Push(args) => push::run(args.target()),
    }
}
