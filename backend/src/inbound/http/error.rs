//! HTTP mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! bubble failures with `?`. Only validation failures carry a body; missing
//! targets and collaborator faults answer with empty 404/500 responses, and
//! collaborator faults are logged here rather than detailed to the caller.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InvalidRequest => HttpResponse::build(self.status_code()).json(self),
            ErrorCode::NotFound => HttpResponse::build(self.status_code()).finish(),
            ErrorCode::InternalError => {
                error!(error = %self, details = ?self.details(), "collaborator failure");
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::json;

    #[test]
    fn invalid_request_is_400() {
        assert_eq!(
            Error::invalid_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_is_404() {
        assert_eq!(
            Error::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_is_500() {
        assert_eq!(
            Error::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn validation_failure_body_lists_violations() {
        let err = Error::invalid_request("beer failed validation")
            .with_details(json!({ "violations": [{ "field": "upc", "message": "is required" }] }));
        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["details"]["violations"][0]["field"], "upc");
    }

    #[actix_web::test]
    async fn internal_failure_body_is_empty() {
        let response = Error::internal("connection reset").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        assert!(bytes.is_empty());
    }

    #[actix_web::test]
    async fn not_found_body_is_empty() {
        let response = Error::not_found("missing").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        assert!(bytes.is_empty());
    }
}
