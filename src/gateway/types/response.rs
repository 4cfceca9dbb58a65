//! API response types and error payloads.
//!
//! - [`ErrorPayload`]: structured error body returned on every failure path
//! - [`ApiError`]: handler error carrying an HTTP status + payload
//! - [`OrderListData`]: `{total, items}` envelope for the list endpoint

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::FruitOrder;

/// Stable machine-readable error codes
pub mod error_codes {
    /// Malformed, missing or out-of-range input
    pub const INVALID_REQUEST: &str = "invalid_request";
    /// Unknown or blank identifier
    pub const NOT_FOUND: &str = "not_found";
}

/// Error payload returned by all failing endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// Short machine-friendly error code
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-friendly error message
    #[schema(example = "customerName and items are required")]
    pub message: String,
}

/// Handler-level error: an HTTP status plus the structured payload.
///
/// Failures never surface as raw faults; every error path is converted
/// into this type and rendered as JSON.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub payload: ErrorPayload,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: ErrorPayload {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    /// 400 with code `invalid_request`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, message)
    }

    /// 404 with code `not_found`
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, message)
    }

    /// Convenience for early returns from handlers
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.payload)).into_response()
    }
}

/// Standard handler result: JSON body on success, [`ApiError`] otherwise.
pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// 200 OK with a JSON body
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// 201 Created with a `Location` header pointing at the new resource
pub fn created<T: Serialize>(location: String, data: T) -> Result<Response, ApiError> {
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response())
}

/// Response body for `GET /orders`.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListData {
    /// Full count of stored orders, not just the page size
    #[schema(example = 1)]
    pub total: usize,
    /// The requested page, sorted ascending by creation time
    pub items: Vec<FruitOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_shape() {
        let err = ApiError::bad_request("bad input");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.payload.code, "invalid_request");
        assert_eq!(err.payload.message, "bad input");
    }

    #[test]
    fn test_not_found_shape() {
        let err = ApiError::not_found("no such order");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.payload.code, "not_found");
    }

    #[test]
    fn test_error_payload_serialization() {
        let err = ApiError::bad_request("oops");
        let json = serde_json::to_value(&err.payload).unwrap();
        assert_eq!(json, serde_json::json!({"code": "invalid_request", "message": "oops"}));
    }
}
