//! API routes.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use serde::Serialize;

use crate::extractors::AppState;
use crate::handlers::{clients, service_records, vehicles, workers};

/// Create the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .nest("/clients", clients_router())
        .nest("/vehicles", vehicles_router())
        .nest("/workers", workers_router())
        .nest("/service_records", service_records_router())
}

fn clients_router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list_clients))
        .route("/", post(clients::create_client))
        .route("/:id", get(clients::get_client))
        .route("/:id", patch(clients::update_client))
        .route("/:id", delete(clients::delete_client))
}

fn vehicles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicles::list_vehicles))
        .route("/", post(vehicles::create_vehicle))
        .route("/:id", get(vehicles::get_vehicle))
        .route("/:id", patch(vehicles::update_vehicle))
        .route("/:id", delete(vehicles::delete_vehicle))
}

fn workers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(workers::list_workers))
        .route("/", post(workers::create_worker))
        .route("/:id", get(workers::get_worker))
        .route("/:id", patch(workers::update_worker))
        .route("/:id", delete(workers::delete_worker))
}

fn service_records_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_records::list_service_records))
        .route("/", post(service_records::create_service_record))
        .route("/:id", get(service_records::get_service_record))
        .route("/:id", patch(service_records::update_service_record))
        .route("/:id", delete(service_records::delete_service_record))
}

async fn api_root() -> axum::Json<ApiRoot> {
    axum::Json(ApiRoot {
        instance_name: "WasteWorks".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRoot {
    instance_name: String,
    version: String,
}
