//! Vehicle API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::{id_string, Id};
use wc_models::{NewVehicle, Vehicle, VehiclePatch};
use wc_services::VehicleService;

use crate::error::ApiResult;
use crate::extractors::{AppState, Pagination};

use super::Collection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    #[serde(with = "id_string")]
    pub id: Id,
    pub plate: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_capacity_m3: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fuel_consumption: Decimal,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            max_capacity_m3: vehicle.max_capacity_m3,
            fuel_consumption: vehicle.fuel_consumption,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleBody {
    pub plate: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_capacity_m3: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fuel_consumption: Decimal,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleBody {
    pub plate: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub max_capacity_m3: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub fuel_consumption: Option<Decimal>,
}

/// GET /api/v1/vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<impl IntoResponse> {
    let service = VehicleService::new(state.pool()?.clone());
    let result = service.list((&*pagination).into()).await?;
    Ok(Json(Collection::from_result(result, VehicleResponse::from)))
}

/// GET /api/v1/vehicles/:id
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = VehicleService::new(state.pool()?.clone());
    let vehicle = service
        .find(id)
        .await?
        .ok_or(wc_core::Error::not_found("Vehicle", id))?;
    Ok(Json(VehicleResponse::from(vehicle)))
}

/// POST /api/v1/vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(body): Json<CreateVehicleBody>,
) -> ApiResult<impl IntoResponse> {
    let service = VehicleService::new(state.pool()?.clone());
    let vehicle = service
        .create(NewVehicle {
            plate: body.plate,
            max_capacity_m3: body.max_capacity_m3,
            fuel_consumption: body.fuel_consumption,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(VehicleResponse::from(vehicle))))
}

/// PATCH /api/v1/vehicles/:id
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(body): Json<UpdateVehicleBody>,
) -> ApiResult<impl IntoResponse> {
    let service = VehicleService::new(state.pool()?.clone());
    let vehicle = service
        .update(
            id,
            VehiclePatch {
                plate: body.plate,
                max_capacity_m3: body.max_capacity_m3,
                fuel_consumption: body.fuel_consumption,
            },
        )
        .await?;
    Ok(Json(VehicleResponse::from(vehicle)))
}

/// DELETE /api/v1/vehicles/:id
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = VehicleService::new(state.pool()?.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
