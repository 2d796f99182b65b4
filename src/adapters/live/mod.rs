//! Live adapters for real external interactions.

pub mod env;
pub mod push;
pub mod shell;
