use reqwest::StatusCode;
use shared::error::GENERIC_GENERATION_ERROR;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation rejected with status {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("failed to reach generation endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerateError {
    /// Message for the error slot: the backend's `detail` when it sent one,
    /// otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_GENERATION_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("business name is required")]
    MissingBusinessName,
    #[error("festival selection is required")]
    MissingFestival,
    #[error("festival '{0}' is not offered by the backend")]
    UnknownFestival(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Generation(String),
    #[error("generation response superseded by a newer submission")]
    Superseded,
}
