//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::HandlerError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid session (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden [{code}]: {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Request conflicts with the resource's current state (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Upstream dependency failed (502)
    #[error("Bad gateway: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn status_and_body(self) -> (StatusCode, ApiErrorBody) {
        let body = |code: &str, message: String, field: Option<String>| ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        };

        match self {
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, body("UNAUTHORIZED", message, None))
            }
            ApiError::Forbidden { code, message, .. } => {
                (StatusCode::FORBIDDEN, body(code, message, None))
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, body("NOT_FOUND", message, None))
            }
            ApiError::Conflict { code, message, .. } => {
                (StatusCode::CONFLICT, body(code, message, None))
            }
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                body("VALIDATION_ERROR", message, field),
            ),
            ApiError::BadGateway { message, .. } => (
                StatusCode::BAD_GATEWAY,
                body("DIRECTORY_UNAVAILABLE", message, None),
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("INTERNAL_ERROR", message, None),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } | ApiError::BadGateway { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, body) = self.status_and_body();
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Map handler outcomes onto HTTP semantics
impl From<HandlerError> for ApiError {
    #[track_caller]
    fn from(e: HandlerError) -> Self {
        let message = e.client_message();
        let location = ErrorLocation::from(Location::caller());

        match e {
            HandlerError::Unauthorized { .. } => ApiError::Unauthorized { message, location },
            HandlerError::NotFound { .. } => ApiError::NotFound { message, location },
            HandlerError::NotAMember { .. } => ApiError::Forbidden {
                code: "NOT_A_MEMBER",
                message,
                location,
            },
            HandlerError::Forbidden { .. } => ApiError::Forbidden {
                code: "FORBIDDEN",
                message,
                location,
            },
            HandlerError::OutOfDateRange { .. } => ApiError::Conflict {
                code: "OUT_OF_DATE_RANGE",
                message,
                location,
            },
            HandlerError::InvalidTransition { .. } => ApiError::Conflict {
                code: "INVALID_TRANSITION",
                message,
                location,
            },
            HandlerError::Directory { source, .. } => {
                log::warn!("Membership directory error: {}", source);
                ApiError::BadGateway { message, location }
            }
            HandlerError::Database { source, .. } => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", source);
                ApiError::Internal { message, location }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
