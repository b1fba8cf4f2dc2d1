use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::auth;
use crate::config::ServerConfig;
use crate::db::repo::{MemoryUserStore, UserStore};

pub struct AppState {
    pub users: Box<dyn UserStore>,
}

impl AppState {
    pub fn new(users: impl UserStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            users: Box::new(users),
        })
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

/// Connectivity probe used by the frontend during setup.
pub async fn health_check() -> Json<HealthResponse> {
    info!("Test endpoint called");
    Json(HealthResponse {
        message: "Backend is working!".to_string(),
        status: "success".to_string(),
    })
}

#[derive(Serialize)]
struct NotFoundResponse {
    message: String,
    success: bool,
}

async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            message: "Not found".to_string(),
            success: false,
        }),
    )
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/test", get(health_check))
        .route("/api/login", post(auth::login))
        .route("/api/register", post(auth::register))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) {
    let state = AppState::new(MemoryUserStore::with_default_admin());
    info!(users = state.users.count(), "User store initialised");
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!("Server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(response) = health_check().await;

        assert_eq!(response.message, "Backend is working!");
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, Json(body)) = not_found().await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Not found");
        assert!(!body.success);
    }
}
