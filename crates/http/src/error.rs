//! Centralized error handling for the staylist HTTP layer.
//!
//! Handlers return `Result<_, AppError>`; the `IntoResponse` impl below is
//! the single terminal error handler. Every failure renders the same HTML
//! error page, parameterized only by status and message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup, DOCTYPE};
use thiserror::Error;

const GENERIC_MESSAGE: &str = "Something went wrong";

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a validation error carrying the concatenated field messages
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(e.to_string()),
            ),
            AppError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(e.to_string()),
            ),
        };

        // One log line per failure: server errors carry the hidden detail at
        // error level, client errors stay at warn.
        match detail {
            Some(detail) => tracing::error!(
                status_code = %status.as_u16(),
                error = %detail,
                "request error"
            ),
            None => tracing::warn!(
                status_code = %status.as_u16(),
                message = %message,
                "request error"
            ),
        }

        (status, error_page(status, &message)).into_response()
    }
}

/// The shared error view. All failures end up here.
fn error_page(status: StatusCode, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "staylist | error" }
            }
            body {
                main {
                    h1 { "Error " (status.as_u16()) }
                    p class="error-message" { (message) }
                    a href="/listings" { "Back to listings" }
                }
            }
        }
    }
}
