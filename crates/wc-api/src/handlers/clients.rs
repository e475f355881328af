//! Client API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::{id_string, Id};
use wc_models::{Client, ClientKind, ClientPatch, NewClient};
use wc_services::ClientService;

use crate::error::ApiResult;
use crate::extractors::{AppState, Pagination};

use super::Collection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    #[serde(with = "id_string")]
    pub id: Id,
    pub name: String,
    pub kind: ClientKind,
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate_per_m3: Decimal,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            kind: client.kind,
            address: client.address,
            rate_per_m3: client.rate_per_m3,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientBody {
    pub name: String,
    pub kind: ClientKind,
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate_per_m3: Decimal,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientBody {
    pub name: Option<String>,
    pub kind: Option<ClientKind>,
    pub address: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub rate_per_m3: Option<Decimal>,
}

/// GET /api/v1/clients
pub async fn list_clients(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<impl IntoResponse> {
    let service = ClientService::new(state.pool()?.clone());
    let result = service.list((&*pagination).into()).await?;
    Ok(Json(Collection::from_result(result, ClientResponse::from)))
}

/// GET /api/v1/clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = ClientService::new(state.pool()?.clone());
    let client = service
        .find(id)
        .await?
        .ok_or(wc_core::Error::not_found("Client", id))?;
    Ok(Json(ClientResponse::from(client)))
}

/// POST /api/v1/clients
pub async fn create_client(
    State(state): State<AppState>,
    Json(body): Json<CreateClientBody>,
) -> ApiResult<impl IntoResponse> {
    let service = ClientService::new(state.pool()?.clone());
    let client = service
        .create(NewClient {
            name: body.name,
            kind: body.kind,
            address: body.address,
            rate_per_m3: body.rate_per_m3,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

/// PATCH /api/v1/clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(body): Json<UpdateClientBody>,
) -> ApiResult<impl IntoResponse> {
    let service = ClientService::new(state.pool()?.clone());
    let client = service
        .update(
            id,
            ClientPatch {
                name: body.name,
                kind: body.kind,
                address: body.address,
                rate_per_m3: body.rate_per_m3,
            },
        )
        .await?;
    Ok(Json(ClientResponse::from(client)))
}

/// DELETE /api/v1/clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let service = ClientService::new(state.pool()?.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_id_and_rate_as_strings() {
        let response = ClientResponse {
            id: 9007199254740993,
            name: "Grand Hotel".into(),
            kind: ClientKind::Hotel,
            address: "1 Seaside Ave".into(),
            rate_per_m3: "5.50".parse().unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "9007199254740993");
        assert_eq!(json["kind"], "HOTEL");
        assert_eq!(json["ratePerM3"], "5.50");
    }

    #[test]
    fn test_update_body_missing_fields_are_none() {
        let body: UpdateClientBody = serde_json::from_str(r#"{"name":"New Name"}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("New Name"));
        assert!(body.kind.is_none());
        assert!(body.rate_per_m3.is_none());
    }
}
