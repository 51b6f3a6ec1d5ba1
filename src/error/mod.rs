//! Error types for moneychanger.

use thiserror::Error;

/// Primary error type for model turns and rate lookups.
#[derive(Error, Debug)]
pub enum MoneyChangerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tool call: {0}")]
    InvalidToolCall(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Broad error category used by the orchestrator when deciding how to degrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network or HTTP-level failure talking to a remote service.
    Transport,
    /// A payload arrived but did not have the expected shape.
    Parse,
    Configuration,
}

impl MoneyChangerError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Api { .. }
            | Self::Authentication(_)
            | Self::RateLimited(_)
            | Self::Network(_) => ErrorCategory::Transport,
            Self::Serialization(_) | Self::InvalidToolCall(_) | Self::InvalidResponse(_) => {
                ErrorCategory::Parse
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MoneyChangerError>;
