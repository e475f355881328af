//! Worker API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::{id_string, Id};
use wc_models::{NewWorker, Worker, WorkerPatch};
use wc_services::WorkerService;

use crate::error::ApiResult;
use crate::extractors::{AppState, Pagination};

use super::Collection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerResponse {
    #[serde(with = "id_string")]
    pub id: Id,
    pub name: String,
    pub role: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_salary: Decimal,
}

impl From<Worker> for WorkerResponse {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.name,
            role: worker.role,
            base_salary: worker.base_salary,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerBody {
    pub name: String,
    pub role: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_salary: Decimal,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerBody {
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_salary: Option<Decimal>,
}

/// GET /api/v1/workers
pub async fn list_workers(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<impl IntoResponse> {
    let service = WorkerService::new(state.pool()?.clone());
    let result = service.list((&*pagination).into()).await?;
    Ok(Json(Collection::from_result(result, WorkerResponse::from)))
}

/// GET /api/v1/workers/:id
pub async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = WorkerService::new(state.pool()?.clone());
    let worker = service
        .find(id)
        .await?
        .ok_or(wc_core::Error::not_found("Worker", id))?;
    Ok(Json(WorkerResponse::from(worker)))
}

/// POST /api/v1/workers
pub async fn create_worker(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkerBody>,
) -> ApiResult<impl IntoResponse> {
    let service = WorkerService::new(state.pool()?.clone());
    let worker = service
        .create(NewWorker {
            name: body.name,
            role: body.role,
            base_salary: body.base_salary,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(WorkerResponse::from(worker))))
}

/// PATCH /api/v1/workers/:id
pub async fn update_worker(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(body): Json<UpdateWorkerBody>,
) -> ApiResult<impl IntoResponse> {
    let service = WorkerService::new(state.pool()?.clone());
    let worker = service
        .update(
            id,
            WorkerPatch {
                name: body.name,
                role: body.role,
                base_salary: body.base_salary,
            },
        )
        .await?;
    Ok(Json(WorkerResponse::from(worker)))
}

/// DELETE /api/v1/workers/:id
pub async fn delete_worker(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = WorkerService::new(state.pool()?.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
