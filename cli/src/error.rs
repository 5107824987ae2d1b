#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use typegen_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure inside the compilation core.
    #[display("{}", _0)]
    Core(AppError),

    /// The config file is missing, malformed or incomplete.
    #[from(ignore)]
    #[display("Config Error: {}", _0)]
    Config(String),

    /// A hook or formatter command could not run or exited unsuccessfully.
    #[from(ignore)]
    #[display("Command failed: {}", _0)]
    Command(String),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// Implemented by hand since several variants carry a plain `String`, which has
/// no `source()` to derive.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
