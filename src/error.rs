use thiserror::Error;

use crate::models::Status;

/// Result type for weight generation
pub type Result<T> = std::result::Result<T, GdError>;

/// Errors that stop the weight stream
#[derive(Error, Debug)]
pub enum GdError {
    /// An input line could not be read as a target point
    #[error("failed to parse target point: {0}")]
    Parse(String),

    /// The target point or the LP built from it is degenerate
    #[error("invalid target point: {0}")]
    Formulation(String),

    /// The LP solver did not return an optimal solution
    #[error("generalized decomposition failed: solver status {status}")]
    Solve { status: Status },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GdError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GdError::Solve { .. } => 1,
            GdError::Parse(_) | GdError::Formulation(_) => 2,
            GdError::Io(_) => 3,
        }
    }
}
