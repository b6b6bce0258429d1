use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Normalized application failure raised for any non-2xx response.
    /// The message already follows the `detail` precedence rules, so
    /// `Display` is the message alone.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection refused, DNS, TLS). Carried
    /// through unmodified from reqwest, never rewritten into `Api`.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }

    pub fn api_status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
