//! Service record repository, including joined reads that resolve the
//! referenced client, vehicle, and worker.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use wc_core::types::Id;
use wc_models::{
    Client, ClientKind, NewServiceRecord, ServiceRecord, ServiceRecordDetail, Vehicle, Worker,
};

use crate::repository::{PaginatedResult, Pagination, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, FromRow)]
struct ServiceRecordRow {
    id: i64,
    client_id: i64,
    vehicle_id: i64,
    worker_id: i64,
    serviced_on: NaiveDate,
    volume_m3: Decimal,
    cost: Decimal,
}

impl From<ServiceRecordRow> for ServiceRecord {
    fn from(row: ServiceRecordRow) -> ServiceRecord {
        ServiceRecord {
            id: row.id,
            client_id: row.client_id,
            vehicle_id: row.vehicle_id,
            worker_id: row.worker_id,
            serviced_on: row.serviced_on,
            volume_m3: row.volume_m3,
            cost: row.cost,
        }
    }
}

/// Flat row for the three-way join; split into a detail on the way out.
#[derive(Debug, Clone, FromRow)]
struct ServiceRecordDetailRow {
    id: i64,
    client_id: i64,
    vehicle_id: i64,
    worker_id: i64,
    serviced_on: NaiveDate,
    volume_m3: Decimal,
    cost: Decimal,
    client_name: String,
    client_kind: String,
    client_address: String,
    rate_per_m3: Decimal,
    plate: String,
    max_capacity_m3: Decimal,
    fuel_consumption: Decimal,
    worker_name: String,
    worker_role: String,
    base_salary: Decimal,
}

impl TryFrom<ServiceRecordDetailRow> for ServiceRecordDetail {
    type Error = RepositoryError;

    fn try_from(row: ServiceRecordDetailRow) -> RepositoryResult<ServiceRecordDetail> {
        let kind: ClientKind = row.client_kind.parse().map_err(RepositoryError::Conversion)?;
        Ok(ServiceRecordDetail {
            record: ServiceRecord {
                id: row.id,
                client_id: row.client_id,
                vehicle_id: row.vehicle_id,
                worker_id: row.worker_id,
                serviced_on: row.serviced_on,
                volume_m3: row.volume_m3,
                cost: row.cost,
            },
            client: Client {
                id: row.client_id,
                name: row.client_name,
                kind,
                address: row.client_address,
                rate_per_m3: row.rate_per_m3,
            },
            vehicle: Vehicle {
                id: row.vehicle_id,
                plate: row.plate,
                max_capacity_m3: row.max_capacity_m3,
                fuel_consumption: row.fuel_consumption,
            },
            worker: Worker {
                id: row.worker_id,
                name: row.worker_name,
                role: row.worker_role,
                base_salary: row.base_salary,
            },
        })
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT sr.id, sr.client_id, sr.vehicle_id, sr.worker_id,
           sr.serviced_on, sr.volume_m3, sr.cost,
           c.name AS client_name, c.kind AS client_kind,
           c.address AS client_address, c.rate_per_m3,
           v.plate, v.max_capacity_m3, v.fuel_consumption,
           w.name AS worker_name, w.role AS worker_role, w.base_salary
    FROM service_records sr
    JOIN clients c ON c.id = sr.client_id
    JOIN vehicles v ON v.id = sr.vehicle_id
    JOIN workers w ON w.id = sr.worker_id
"#;

/// Service record repository implementation.
pub struct ServiceRecordRepository {
    pool: PgPool,
}

impl ServiceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<ServiceRecord>> {
        let row = sqlx::query_as::<_, ServiceRecordRow>(
            r#"
            SELECT id, client_id, vehicle_id, worker_id, serviced_on, volume_m3, cost
            FROM service_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ServiceRecord::from))
    }

    /// Single joined read with referenced entities attached.
    pub async fn find_detailed(&self, id: Id) -> RepositoryResult<Option<ServiceRecordDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE sr.id = $1");
        let row = sqlx::query_as::<_, ServiceRecordDetailRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ServiceRecordDetail::try_from).transpose()
    }

    /// Joined listing, newest service date first.
    pub async fn list_detailed(
        &self,
        pagination: Pagination,
    ) -> RepositoryResult<PaginatedResult<ServiceRecordDetail>> {
        let sql = format!("{DETAIL_SELECT} ORDER BY sr.serviced_on DESC, sr.id DESC LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, ServiceRecordDetailRow>(&sql)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM service_records")
            .fetch_one(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(ServiceRecordDetail::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn create(&self, data: &NewServiceRecord) -> RepositoryResult<ServiceRecord> {
        let row = sqlx::query_as::<_, ServiceRecordRow>(
            r#"
            INSERT INTO service_records (client_id, vehicle_id, worker_id, serviced_on, volume_m3, cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, client_id, vehicle_id, worker_id, serviced_on, volume_m3, cost
            "#,
        )
        .bind(data.client_id)
        .bind(data.vehicle_id)
        .bind(data.worker_id)
        .bind(data.serviced_on)
        .bind(data.volume_m3)
        .bind(data.cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Write the full effective field set, cost included. Returns `None`
    /// when the id does not exist.
    pub async fn update(
        &self,
        id: Id,
        data: &NewServiceRecord,
    ) -> RepositoryResult<Option<ServiceRecord>> {
        let row = sqlx::query_as::<_, ServiceRecordRow>(
            r#"
            UPDATE service_records
            SET client_id = $2, vehicle_id = $3, worker_id = $4,
                serviced_on = $5, volume_m3 = $6, cost = $7
            WHERE id = $1
            RETURNING id, client_id, vehicle_id, worker_id, serviced_on, volume_m3, cost
            "#,
        )
        .bind(id)
        .bind(data.client_id)
        .bind(data.vehicle_id)
        .bind(data.worker_id)
        .bind(data.serviced_on)
        .bind(data.volume_m3)
        .bind(data.cost)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ServiceRecord::from))
    }

    pub async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM service_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
