//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("{field} must be a whole number, found {value}")]
    NonInteger { field: String, value: String },

    #[error("{field} has {actual} entries, expected {expected}")]
    Shape {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("Provide a configuration file or omit --config to use the built-in defaults."),
            Self::NonInteger { .. } => {
                Some("Resource quantities must be whole numbers of units.")
            }
            Self::Shape { .. } => Some(
                "Every vector must have one entry per resource type and every matrix one row per process.",
            ),
            Self::MissingField { .. } => {
                Some("Add the missing configuration field noted in the error message.")
            }
            Self::InvalidValue { .. } | Self::ParseError { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("config.not_found"),
            Self::ParseError { .. } => Some("config.parse"),
            Self::MissingField { .. } => Some("config.missing_field"),
            Self::NonInteger { .. } => Some("config.non_integer"),
            Self::Shape { .. } => Some("config.shape"),
            Self::InvalidValue { .. } => Some("config.invalid_value"),
        }
    }
}
