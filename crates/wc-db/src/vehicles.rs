//! Vehicle repository.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use wc_core::types::Id;
use wc_models::{NewVehicle, Vehicle};

use crate::repository::{PaginatedResult, Pagination, RepositoryResult};

#[derive(Debug, Clone, FromRow)]
struct VehicleRow {
    id: i64,
    plate: String,
    max_capacity_m3: Decimal,
    fuel_consumption: Decimal,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Vehicle {
        Vehicle {
            id: row.id,
            plate: row.plate,
            max_capacity_m3: row.max_capacity_m3,
            fuel_consumption: row.fuel_consumption,
        }
    }
}

/// Vehicle repository implementation.
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT id, plate, max_capacity_m3, fuel_consumption FROM vehicles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    /// Plate lookup backing the uniqueness check.
    pub async fn find_by_plate(&self, plate: &str) -> RepositoryResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT id, plate, max_capacity_m3, fuel_consumption FROM vehicles WHERE plate = $1",
        )
        .bind(plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    pub async fn find_all(
        &self,
        pagination: Pagination,
    ) -> RepositoryResult<PaginatedResult<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, plate, max_capacity_m3, fuel_consumption
            FROM vehicles
            ORDER BY plate, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        let items = rows.into_iter().map(Vehicle::from).collect();
        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn create(&self, data: &NewVehicle) -> RepositoryResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (plate, max_capacity_m3, fuel_consumption)
            VALUES ($1, $2, $3)
            RETURNING id, plate, max_capacity_m3, fuel_consumption
            "#,
        )
        .bind(&data.plate)
        .bind(data.max_capacity_m3)
        .bind(data.fuel_consumption)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn update(&self, id: Id, data: &NewVehicle) -> RepositoryResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET plate = $2, max_capacity_m3 = $3, fuel_consumption = $4
            WHERE id = $1
            RETURNING id, plate, max_capacity_m3, fuel_consumption
            "#,
        )
        .bind(id)
        .bind(&data.plate)
        .bind(data.max_capacity_m3)
        .bind(data.fuel_consumption)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    pub async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
