//! API response envelope

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// API response wrapper
///
/// `{success: true, data}` or `{success: false, message, errors}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human readable failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field level failures
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: BTreeMap::new(),
        }
    }

    /// Create a failed response
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: BTreeMap::new(),
        }
    }

    /// Create a failed response carrying field errors
    #[must_use]
    pub fn invalid(message: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            errors,
            ..Self::failure(message)
        }
    }

    /// Convert the envelope into a `CoreResult`
    pub fn into_result(self) -> CoreResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(CoreError::RequestFailed(
                "The server returned an empty response".to_string(),
            )),
            (false, _) => {
                let message = self
                    .message
                    .unwrap_or_else(|| "Request failed".to_string());
                if self.errors.is_empty() {
                    Err(CoreError::RequestFailed(message))
                } else {
                    Err(CoreError::Validation {
                        message,
                        errors: self.errors,
                    })
                }
            }
        }
    }
}

impl<T> From<CoreError> for ApiResponse<T> {
    fn from(err: CoreError) -> Self {
        let errors = err.field_errors();
        Self::invalid(err.to_string(), errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_errors_is_request_failed() {
        let resp: ApiResponse<()> = ApiResponse::failure("Network error");
        assert_eq!(
            resp.into_result(),
            Err(CoreError::RequestFailed("Network error".to_string()))
        );
    }

    #[test]
    fn failure_with_errors_is_validation() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "Email is required".to_string());
        let resp: ApiResponse<()> = ApiResponse::invalid("Validation failed", errors);
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
        assert_eq!(err.field_errors()["email"], "Email is required");
    }

    #[test]
    fn envelope_json_shape() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 42}));

        let resp: ApiResponse<u8> = ApiResponse::failure("nope");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "nope"}));
    }

    #[test]
    fn invalid_credentials_converts_to_message() {
        let resp: ApiResponse<()> = CoreError::InvalidCredentials.into();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
    }
}
