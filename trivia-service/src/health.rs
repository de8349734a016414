//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{repository::TriviaStore, state::AppState};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Backend name
    pub backend: String,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe, always 200 while the process serves requests
pub async fn health<S: TriviaStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe
///
/// Returns 503 Service Unavailable when the store does not answer a ping.
pub async fn readiness<S: TriviaStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let store = state.store();

    let status = match store.ping().await {
        Ok(()) => DependencyStatus {
            healthy: true,
            backend: store.backend().to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => {
            tracing::error!(backend = store.backend(), "Store health check failed: {}", e);
            DependencyStatus {
                healthy: false,
                backend: store.backend().to_string(),
                message: Some(format!("Ping failed: {}", e.kind)),
            }
        }
    };

    let ready = status.healthy;
    let response = ReadinessResponse {
        ready,
        service: state.config().service.name.clone(),
        dependencies: HashMap::from([("store".to_string(), status)]),
    };

    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
