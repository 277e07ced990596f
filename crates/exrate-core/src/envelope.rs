use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Outcome of a single remote read.
///
/// Exactly one arm is ever present: the parsed payload or the failure detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseEnvelope<T> {
    Success { payload: T },
    Failure { error: EnvelopeError },
}

impl<T> ResponseEnvelope<T> {
    pub fn success(payload: T) -> Self {
        Self::Success { payload }
    }

    pub fn failure(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            error: EnvelopeError::new(endpoint, message),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&EnvelopeError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, EnvelopeError> {
        match self {
            Self::Success { payload } => Ok(payload),
            Self::Failure { error } => Err(error),
        }
    }
}

/// Failure detail of a remote read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    /// Identifies the endpoint that failed, usually its URL.
    pub endpoint: String,
    pub message: String,
}

impl EnvelopeError {
    pub fn new(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl Display for EnvelopeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed with message: {}", self.endpoint, self.message)
    }
}
