use thiserror::Error;

/// Exit code for a lookup that ended in a [`exrate_core::RateError`].
pub const RATE_ERROR_EXIT_CODE: u8 = 3;

/// Failures that escaped the rate result channel, mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("rate lookup task failed: {0}")]
    Task(String),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
            Self::Task(_) => 11,
        }
    }
}

impl From<tokio::task::JoinError> for CliError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task(error.to_string())
    }
}
