//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pitstop_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized,
    Forbidden,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::Internal(detail) => {
                // Log internal errors; clients only see the generic body.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from store errors. A malformed id can never match a stored
// document, so it surfaces as 404 rather than an unhandled fault.
impl From<pitstop_core::StoreError> for AppError {
    fn from(err: pitstop_core::StoreError) -> Self {
        match err {
            pitstop_core::StoreError::MalformedId(id) => {
                AppError::NotFound(format!("No document with id {}", id))
            }
            pitstop_core::StoreError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
            pitstop_core::StoreError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
        }
    }
}

// Conversion from authentication errors raised inside handlers (the
// extractor handles the pre-handler rejections itself).
impl From<pitstop_core::ports::AuthError> for AppError {
    fn from(err: pitstop_core::ports::AuthError) -> Self {
        use pitstop_core::ports::AuthError;
        match err {
            AuthError::MissingCredential | AuthError::OwnershipMismatch => AppError::Unauthorized,
            AuthError::TokenExpired | AuthError::InvalidToken(_) => AppError::Forbidden,
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
