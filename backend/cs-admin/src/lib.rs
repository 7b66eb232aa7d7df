//! cs-admin library
//!
//! Command parsing and execution for the connection settings admin tool,
//! exported so the binary and the tests share them.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{CommandOutput, Commands, apply_session_overrides, execute};
pub use error::{AdminError, AdminErrorResult};
