//! Error types for task-router.
//!
//! The routing core is total and never fails; these cover the layers
//! around it (settings, environment, model dispatch).

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a model backend.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Model {model} not available")]
    ModelNotAvailable { model: String },

    #[error("Request to {model} failed: {reason}")]
    RequestFailed { model: String, reason: String },
}

impl LlmError {
    /// Whether switching to the alternate tier can help.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LlmError::ModelNotAvailable { .. })
    }
}
