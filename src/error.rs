//! Error types and handling for the `JourneyAI` conformance gate

use thiserror::Error;

/// Main error type for the `JourneyAI` library
///
/// Data problems in generated payloads are never reported through this
/// type: the validator returns a structured
/// [`FailureReport`](crate::gate::FailureReport) instead. This enum covers
/// programmer and environment errors only.
#[derive(Error, Debug)]
pub enum JourneyAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Lookup of a record kind that is not registered
    #[error("Unknown record kind: {kind}")]
    SchemaNotFound { kind: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl JourneyAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new unknown-record-kind error
    pub fn schema_not_found<S: Into<String>>(kind: S) -> Self {
        Self::SchemaNotFound { kind: kind.into() }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            JourneyAiError::Config { .. } => {
                "Configuration error. Please check your config file and environment overrides."
                    .to_string()
            }
            JourneyAiError::SchemaNotFound { kind } => {
                format!("No schema is registered under the name '{kind}'.")
            }
            JourneyAiError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = JourneyAiError::config("missing limits section");
        assert!(matches!(config_err, JourneyAiError::Config { .. }));

        let schema_err = JourneyAiError::schema_not_found("Banana");
        assert!(matches!(schema_err, JourneyAiError::SchemaNotFound { .. }));

        let general_err = JourneyAiError::general("something went wrong");
        assert!(matches!(general_err, JourneyAiError::General { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = JourneyAiError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let schema_err = JourneyAiError::schema_not_found("Banana");
        assert!(schema_err.user_message().contains("Banana"));

        let general_err = JourneyAiError::general("test message");
        assert_eq!(general_err.user_message(), "test message");
    }
}
