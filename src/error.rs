// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (malformed quiz request body)
    BadRequest,

    // 404 Not Found (absent entity or empty listing page)
    NotFound,

    // 422 Unprocessable Entity (rejected write operation)
    Unprocessable,

    // 500 Internal Server Error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Fixed reason phrase for every status code the API declares.
pub fn status_message(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Resource Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Internal Server Error",
    }
}

/// Renders the generic error envelope for a status code.
/// Every failure, including the router-level 404/405 fallbacks, goes
/// through here so clients always see the same shape.
pub fn error_response(status: StatusCode) -> Response {
    let body = Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": status_message(status),
    }));

    (status, body).into_response()
}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into the JSON envelope with the matching status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_response(status)
    }
}

/// Converts `sqlx::Error` into `AppError::Internal`.
/// Allows using `?` operator on read queries; write paths map store
/// failures to `Unprocessable` explicitly.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
