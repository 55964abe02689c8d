//! Error types for tweetsense-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tweetsense::TweetsenseError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Input or config file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Tweet or label data unusable
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Any other library error
    #[error("tweetsense error: {0}")]
    Tweetsense(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Tweetsense(_) => ExitCode::from(1),
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::InvalidData(_) => ExitCode::from(4),
            Self::InvalidConfig(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
            Self::Output(_) => ExitCode::from(8),
        }
    }
}

impl From<TweetsenseError> for CliError {
    fn from(e: TweetsenseError) -> Self {
        match e {
            TweetsenseError::Io(io) => Self::Io(io),
            TweetsenseError::Config(_) | TweetsenseError::UnknownMetric(_) => {
                Self::InvalidConfig(e.to_string())
            }
            TweetsenseError::Parse { .. }
            | TweetsenseError::DimensionMismatch { .. }
            | TweetsenseError::InvalidLabel { .. }
            | TweetsenseError::EmptyInput(_) => Self::InvalidData(e.to_string()),
            other => Self::Tweetsense(other.to_string()),
        }
    }
}
