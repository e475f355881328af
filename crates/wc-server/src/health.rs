//! Health endpoints.
//!
//! Liveness answers as long as the process serves requests; readiness
//! additionally pings the database so load balancers stop routing when
//! the pool is gone.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use wc_api::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    database: &'static str,
}

/// GET /health/live
pub async fn liveness() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok",
        database: "not_checked",
    })
}

/// GET /health/ready
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.pool {
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "ok",
            Err(err) => {
                tracing::warn!(error = %err, "readiness database ping failed");
                "unreachable"
            }
        },
        None => "not_configured",
    };

    let status = if database == "ok" { "ok" } else { "degraded" };
    let code = if database == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(HealthStatus { status, database }))
}
