//! Unified error type definition

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Request failed (message is shown to the user as-is)
    #[error("{0}")]
    RequestFailed(String),

    /// Login rejected
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No active session
    #[error("You must be logged in to do that")]
    Unauthorized,

    /// Validation failed (field level errors keyed by field name)
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, String>,
    },
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing entity, injected failure),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials
            | Self::NotFound(_)
            | Self::Unauthorized
            | Self::Validation { .. } => true,
            Self::RequestFailed(_) => false,
        }
    }

    /// Field level errors, empty for non-validation errors
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            Self::Validation { errors, .. } => errors.clone(),
            _ => BTreeMap::new(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message() {
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn request_failed_is_not_expected() {
        assert!(!CoreError::RequestFailed("boom".to_string()).is_expected());
        assert!(CoreError::NotFound("svc_9".to_string()).is_expected());
    }

    #[test]
    fn field_errors_only_for_validation() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "Email is required".to_string());
        let err = CoreError::Validation {
            message: "Please fix the highlighted fields".to_string(),
            errors,
        };
        assert_eq!(err.field_errors().len(), 1);
        assert!(CoreError::Unauthorized.field_errors().is_empty());
    }
}
