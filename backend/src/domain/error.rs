//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP inbound adapter decides
//! which status code and body each category maps to.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body is malformed or fails validation.
    InvalidRequest,
    /// The targeted record does not exist.
    NotFound,
    /// An unexpected failure inside a collaborator.
    InternalError,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use brewery_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no such beer");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "beer failed validation")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details, e.g. a validation violation list.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use brewery_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "upc" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_code_as_snake_case() {
        let err = Error::invalid_request("bad input");
        let value = serde_json::to_value(&err).expect("error serializes");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["message"], "bad input");
    }

    #[test]
    fn omits_details_when_absent() {
        let err = Error::internal("boom");
        let value = serde_json::to_value(&err).expect("error serializes");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn carries_attached_details() {
        let err = Error::invalid_request("bad").with_details(json!({ "field": "price" }));
        assert_eq!(
            err.details().and_then(|d| d.get("field")),
            Some(&json!("price"))
        );
    }
}
