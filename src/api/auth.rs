use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::server::AppState;
use crate::error::ApiError;

// Missing body fields deserialize to empty strings, mirroring how the
// reference backend treated absent values as falsy.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
}

/// The slice of a user that may leave the server. The password never does.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: u32,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub success: bool,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub success: bool,
}

/// Check a username/password pair against the store.
///
/// Unknown usernames and wrong passwords are indistinguishable in the
/// response, so callers cannot enumerate accounts.
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;

    info!(username = %req.username, "Login attempt");

    match state.users.find_by_credentials(&req.username, &req.password) {
        Some(user) => {
            info!(username = %user.username, "Login successful");
            Ok(Json(LoginResponse {
                message: "Login successful".to_string(),
                success: true,
                user: PublicUser {
                    id: user.id,
                    username: user.username,
                },
            }))
        }
        None => {
            warn!(username = %req.username, "Login failed");
            Err(ApiError::InvalidCredentials)
        }
    }
}

/// Create a new account.
///
/// Validation order is part of the API contract: missing fields, then
/// password mismatch, then password length, then username uniqueness.
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;

    info!(username = %req.username, "Registration attempt");

    if req.username.is_empty() || req.password.is_empty() || req.confirm_password.is_empty() {
        return Err(ApiError::MissingFields);
    }
    if req.password != req.confirm_password {
        return Err(ApiError::PasswordMismatch);
    }
    if req.password.chars().count() < 6 {
        return Err(ApiError::PasswordTooShort);
    }

    let user = state.users.insert(&req.username, &req.password)?;

    info!(username = %user.username, id = user.id, "User registered");

    Ok(Json(RegisterResponse {
        message: "Registration successful".to_string(),
        success: true,
    }))
}
