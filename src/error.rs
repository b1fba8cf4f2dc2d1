//! Request error types and their HTTP response conversion.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::repo::UsernameTaken;

/// Every way a request can be rejected.
///
/// The display string of each variant is the exact `message` the frontend
/// expects in the failure envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid JSON")]
    InvalidBody,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<UsernameTaken> for ApiError {
    fn from(_: UsernameTaken) -> Self {
        ApiError::UsernameTaken
    }
}

#[derive(Serialize)]
struct FailureBody {
    message: String,
    success: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = FailureBody {
            message: self.to_string(),
            success: false,
        };
        (self.status_code(), Json(body)).into_response()
    }
}
