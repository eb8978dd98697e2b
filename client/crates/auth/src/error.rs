//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::{http::HttpError, storage::StorageError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// One-time code rejected, expired or exhausted
    #[error("Invalid OTP")]
    InvalidOtp,

    /// Registration refused (duplicate email, invalid fields)
    #[error("Registration failed: {0}")]
    Registration(String),

    /// OTP could not be dispatched
    #[error("OTP delivery failed: {0}")]
    Delivery(String),

    /// Persisted session could not be read (degraded to anonymous)
    #[error("Failed to read persisted session")]
    PersistenceRead(#[source] StorageError),

    /// Session could not be persisted
    #[error("Failed to persist session")]
    PersistenceWrite(#[source] StorageError),

    /// Input rejected before reaching the backend
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Auth backend unreachable
    #[error("Network error: {0}")]
    Transport(String),

    /// Auth backend did not answer in time
    #[error("{0}")]
    Timeout(String),

    /// Unexpected backend response
    #[error("Auth backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::InvalidOtp => ErrorKind::Unauthorized,
            AuthError::Registration(_) => ErrorKind::Conflict,
            AuthError::Delivery(_) | AuthError::Transport(_) => ErrorKind::ServiceUnavailable,
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::Timeout(_) => ErrorKind::RequestTimeout,
            AuthError::Backend { status, .. } => ErrorKind::from_status_code(*status),
            AuthError::PersistenceRead(_)
            | AuthError::PersistenceWrite(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// What the user can do about it, where there is something to do
    fn action(&self) -> Option<&'static str> {
        match self {
            AuthError::InvalidCredentials => Some("Check your email and password and try again"),
            AuthError::InvalidOtp => Some("Enter the 6-digit code sent to your email"),
            AuthError::Delivery(_) => Some("Request a new code in a moment"),
            AuthError::Transport(_) => Some("Check that the auth service is reachable"),
            AuthError::Timeout(_) => Some("Please try again"),
            AuthError::PersistenceWrite(_) => Some("Check that the session file is writable"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.action() {
            Some(action) => err.with_action(action),
            None => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PersistenceWrite(e) => {
                tracing::error!(error = %e, "Session persistence failed");
            }
            AuthError::PersistenceRead(e) => {
                tracing::warn!(error = %e, "Persisted session unreadable");
            }
            AuthError::Backend { status, message } if self.kind().is_server_error() => {
                tracing::error!(status, message = %message, "Auth backend failure");
            }
            AuthError::Transport(_) | AuthError::Timeout(_) | AuthError::Backend { .. } => {
                tracing::warn!(error = %self, "Auth backend call failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidOtp => {
                tracing::warn!("Invalid OTP attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app_error = err.to_app_error();
        match err {
            AuthError::PersistenceRead(source) | AuthError::PersistenceWrite(source) => {
                app_error.with_source(source)
            }
            _ => app_error,
        }
    }
}

impl From<HttpError> for AuthError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Network(msg) => AuthError::Transport(msg),
            HttpError::Timeout(msg) => AuthError::Timeout(msg),
            HttpError::Status { status, message } => AuthError::Backend { status, message },
            HttpError::Parse(msg) => AuthError::Backend {
                status: 502,
                message: msg,
            },
            HttpError::Config(msg) | HttpError::Serialization(msg) => AuthError::Internal(msg),
        }
    }
}
