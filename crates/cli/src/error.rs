use thiserror::Error;

use warehouse_core::DomainError;

/// Failures surfaced by the menu loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The user typed something that does not parse as the expected kind.
    #[error("'{input}' is not a valid {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The input stream was closed.
    #[error("end of input")]
    EndOfInput,
}
