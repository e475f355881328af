//! Service record API handlers.
//!
//! Reads return the record with its referenced client, vehicle, and
//! worker resolved. Writes go through the workflow services, so the
//! validation chain and cost derivation run before anything is
//! persisted; cost never appears in a request body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::{id_string, id_string_opt, Id};
use wc_db::ServiceRecordRepository;
use wc_models::{ServiceRecord, ServiceRecordDetail};
use wc_services::{
    CreateServiceRecordService, DeleteServiceRecordService, PgEntityStore, ServiceRecordParams,
    ServiceRecordPatch, UpdateServiceRecordService,
};

use crate::error::ApiResult;
use crate::extractors::{AppState, Pagination};

use super::clients::ClientResponse;
use super::vehicles::VehicleResponse;
use super::workers::WorkerResponse;
use super::Collection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordResponse {
    #[serde(with = "id_string")]
    pub id: Id,
    #[serde(with = "id_string")]
    pub client_id: Id,
    #[serde(with = "id_string")]
    pub vehicle_id: Id,
    #[serde(with = "id_string")]
    pub worker_id: Id,
    pub serviced_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume_m3: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost: Decimal,
}

impl From<ServiceRecord> for ServiceRecordResponse {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            client_id: record.client_id,
            vehicle_id: record.vehicle_id,
            worker_id: record.worker_id,
            serviced_on: record.serviced_on,
            volume_m3: record.volume_m3,
            cost: record.cost,
        }
    }
}

/// Joined read shape: the record plus its resolved references.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordDetailResponse {
    #[serde(flatten)]
    pub record: ServiceRecordResponse,
    pub client: ClientResponse,
    pub vehicle: VehicleResponse,
    pub worker: WorkerResponse,
}

impl From<ServiceRecordDetail> for ServiceRecordDetailResponse {
    fn from(detail: ServiceRecordDetail) -> Self {
        Self {
            record: detail.record.into(),
            client: detail.client.into(),
            vehicle: detail.vehicle.into(),
            worker: detail.worker.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRecordBody {
    #[serde(with = "id_string")]
    pub client_id: Id,
    #[serde(with = "id_string")]
    pub vehicle_id: Id,
    #[serde(with = "id_string")]
    pub worker_id: Id,
    pub serviced_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume_m3: Decimal,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRecordBody {
    #[serde(default, with = "id_string_opt")]
    pub client_id: Option<Id>,
    #[serde(default, with = "id_string_opt")]
    pub vehicle_id: Option<Id>,
    #[serde(default, with = "id_string_opt")]
    pub worker_id: Option<Id>,
    pub serviced_on: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub volume_m3: Option<Decimal>,
}

/// GET /api/v1/service_records
pub async fn list_service_records(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<impl IntoResponse> {
    let repo = ServiceRecordRepository::new(state.pool()?.clone());
    let result = repo
        .list_detailed((&*pagination).into())
        .await
        .map_err(wc_core::Error::from)?;
    Ok(Json(Collection::from_result(
        result,
        ServiceRecordDetailResponse::from,
    )))
}

/// GET /api/v1/service_records/:id
pub async fn get_service_record(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let repo = ServiceRecordRepository::new(state.pool()?.clone());
    let detail = repo
        .find_detailed(id)
        .await
        .map_err(wc_core::Error::from)?
        .ok_or(wc_core::Error::not_found("ServiceRecord", id))?;
    Ok(Json(ServiceRecordDetailResponse::from(detail)))
}

/// POST /api/v1/service_records
pub async fn create_service_record(
    State(state): State<AppState>,
    Json(body): Json<CreateServiceRecordBody>,
) -> ApiResult<impl IntoResponse> {
    let store = PgEntityStore::new(state.pool()?.clone());
    let record = CreateServiceRecordService::new(&store)
        .call(ServiceRecordParams {
            client_id: body.client_id,
            vehicle_id: body.vehicle_id,
            worker_id: body.worker_id,
            serviced_on: body.serviced_on,
            volume_m3: body.volume_m3,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ServiceRecordResponse::from(record))))
}

/// PATCH /api/v1/service_records/:id
pub async fn update_service_record(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(body): Json<UpdateServiceRecordBody>,
) -> ApiResult<impl IntoResponse> {
    let store = PgEntityStore::new(state.pool()?.clone());
    let record = UpdateServiceRecordService::new(&store)
        .call(
            id,
            ServiceRecordPatch {
                client_id: body.client_id,
                vehicle_id: body.vehicle_id,
                worker_id: body.worker_id,
                serviced_on: body.serviced_on,
                volume_m3: body.volume_m3,
            },
        )
        .await?;
    Ok(Json(ServiceRecordResponse::from(record)))
}

/// DELETE /api/v1/service_records/:id
pub async fn delete_service_record(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let store = PgEntityStore::new(state.pool()?.clone());
    DeleteServiceRecordService::new(&store).call(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_rejects_float_volume() {
        // Decimal fields cross the boundary as strings, never JSON floats.
        let err = serde_json::from_str::<CreateServiceRecordBody>(
            r#"{"clientId":"1","vehicleId":"2","workerId":"3","servicedOn":"2026-03-14","volumeM3":10.5}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_create_body_accepts_string_decimals_and_ids() {
        let body: CreateServiceRecordBody = serde_json::from_str(
            r#"{"clientId":"1","vehicleId":2,"workerId":"3","servicedOn":"2026-03-14","volumeM3":"10.5"}"#,
        )
        .unwrap();
        assert_eq!(body.client_id, 1);
        assert_eq!(body.vehicle_id, 2);
        assert_eq!(body.volume_m3.to_string(), "10.5");
    }

    #[test]
    fn test_cost_serializes_with_two_digits() {
        let response = ServiceRecordResponse {
            id: 10,
            client_id: 1,
            vehicle_id: 2,
            worker_id: 3,
            serviced_on: "2026-03-14".parse().unwrap(),
            volume_m3: "15".parse().unwrap(),
            cost: wc_core::round_money("82.5".parse().unwrap()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cost"], "82.50");
        assert_eq!(json["id"], "10");
    }

    #[test]
    fn test_update_body_allows_partial_fields() {
        let body: UpdateServiceRecordBody =
            serde_json::from_str(r#"{"vehicleId":"7"}"#).unwrap();
        assert_eq!(body.vehicle_id, Some(7));
        assert!(body.volume_m3.is_none());
        assert!(body.serviced_on.is_none());
    }
}
