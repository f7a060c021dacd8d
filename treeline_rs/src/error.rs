//! Error types for the parsing engine.
//!
//! `CliError` is the closed taxonomy of user-facing parse and binding
//! failures; the message wording of each variant is part of the observable
//! contract and is covered by tests. `RunError` is the dispatch-boundary
//! carrier that `Command::execute` returns.

use thiserror::Error;

/// User-facing parse and binding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The alias was not present in the resolved command's option table.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A value-bearing option had no value token available. Also raised
    /// when a value-bearing short option is not last in its cluster.
    #[error("missing value for: {0}")]
    MissingValue(String),

    /// A no-value flag was given an inline `=value`.
    #[error("option '{0}' does not support values")]
    UnexpectedValue(String),

    /// A required positional slot had no candidate left.
    #[error("not enough arguments: missing value for: {0}")]
    MissingArgument(String),

    /// Leftover positional candidates with no variadic slot to absorb them.
    #[error("too many arguments")]
    TooManyArguments,

    /// A token could not be converted to the requested integer type.
    #[error("could not convert argument '{0}' to integer")]
    InvalidInteger(String),

    /// A well-formed integer token outside the bounds of the target width.
    #[error("argument '{token}' is outside the range of {min} and {max}")]
    IntegerOutOfRange {
        token: String,
        min: String,
        max: String,
    },

    /// A token could not be converted to a floating-point number.
    #[error("could not convert argument '{0}' to number")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `Command::execute`.
///
/// The application boundary (`Application::run`) is the single place that
/// turns these into an exit code; nothing below it prints.
#[derive(Debug, Error)]
pub enum RunError {
    /// A parse or binding failure from the engine itself.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// A failure returned by a command handler.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),

    /// The help output stream could not be written.
    #[error("failed to write help output: {0}")]
    Output(#[from] std::io::Error),
}
