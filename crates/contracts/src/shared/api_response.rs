//! Uniform response envelope returned by every API endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `{data, success, message, errors, httpStatus}`
///
/// `success=false` is a normal, decodable response. Callers branch on
/// `success` themselves or go through [`ApiResponse::into_result`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub http_status: String,
}

/// Application-level rejection (`success=false`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApplicationError {
    pub message: String,
    pub errors: Vec<String>,
}

impl ApplicationError {
    /// Message followed by the field-level errors, if any.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", self.message, self.errors.join("; "))
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_summary(&self) -> String {
        self.application_error().summary()
    }

    fn application_error(&self) -> ApplicationError {
        let message = if self.message.trim().is_empty() {
            "An error occurred".to_string()
        } else {
            self.message.clone()
        };
        ApplicationError {
            message,
            errors: self.errors.clone().unwrap_or_default(),
        }
    }

    /// Converts the envelope into its payload, turning `success=false`
    /// (or a successful envelope without data) into an [`ApplicationError`].
    pub fn into_result(self) -> Result<T, ApplicationError> {
        if !self.success {
            return Err(self.application_error());
        }
        self.data.ok_or_else(|| ApplicationError {
            message: "Response contained no data".to_string(),
            errors: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_envelope() {
        let json = r#"{"data":{"id":3},"success":true,"message":"Created","errors":null,"httpStatus":"CREATED"}"#;
        let env: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(env.is_success());
        assert_eq!(env.http_status, "CREATED");
        assert_eq!(env.data.unwrap()["id"], 3);
    }

    #[test]
    fn null_data_decodes_for_delete() {
        let json = r#"{"data":null,"success":true,"message":"Deleted","errors":null,"httpStatus":"OK"}"#;
        let env: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(env.data.is_none());
        assert!(env.success);
    }

    #[test]
    fn missing_optional_fields_default() {
        let env: ApiResponse<u32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(env.message, "");
        assert!(env.errors.is_none());
        assert_eq!(env.into_result().unwrap_err().message, "An error occurred");
    }

    #[test]
    fn rejection_keeps_field_errors() {
        let json = r#"{"data":null,"success":false,"message":"Validation failed","errors":["name: too short","amount: negative"],"httpStatus":"BAD_REQUEST"}"#;
        let env: ApiResponse<u32> = serde_json::from_str(json).unwrap();
        assert!(!env.is_success());
        assert_eq!(
            env.error_summary(),
            "Validation failed: name: too short; amount: negative"
        );
        let err = env.into_result().unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn success_without_data_is_an_error() {
        let env: ApiResponse<u32> = serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err().message,
            "Response contained no data"
        );
    }
}
