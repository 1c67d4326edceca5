use thiserror::Error;

/// Main error type for Wolfcheck operations
#[derive(Error, Debug)]
pub enum WolfcheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{provider} Error: {cause}")]
    Provider { provider: String, cause: String },
}

impl WolfcheckError {
    pub fn provider(provider: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Provider {
            provider: provider.into(),
            cause: cause.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WolfcheckError>;
