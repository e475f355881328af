//! Worker repository.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use wc_core::types::Id;
use wc_models::{NewWorker, Worker};

use crate::repository::{PaginatedResult, Pagination, RepositoryResult};

#[derive(Debug, Clone, FromRow)]
struct WorkerRow {
    id: i64,
    name: String,
    role: String,
    base_salary: Decimal,
}

impl From<WorkerRow> for Worker {
    fn from(row: WorkerRow) -> Worker {
        Worker {
            id: row.id,
            name: row.name,
            role: row.role,
            base_salary: row.base_salary,
        }
    }
}

/// Worker repository implementation.
pub struct WorkerRepository {
    pool: PgPool,
}

impl WorkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Worker>> {
        let row = sqlx::query_as::<_, WorkerRow>(
            "SELECT id, name, role, base_salary FROM workers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Worker::from))
    }

    pub async fn find_all(
        &self,
        pagination: Pagination,
    ) -> RepositoryResult<PaginatedResult<Worker>> {
        let rows = sqlx::query_as::<_, WorkerRow>(
            r#"
            SELECT id, name, role, base_salary
            FROM workers
            ORDER BY name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workers")
            .fetch_one(&self.pool)
            .await?;

        let items = rows.into_iter().map(Worker::from).collect();
        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn create(&self, data: &NewWorker) -> RepositoryResult<Worker> {
        let row = sqlx::query_as::<_, WorkerRow>(
            r#"
            INSERT INTO workers (name, role, base_salary)
            VALUES ($1, $2, $3)
            RETURNING id, name, role, base_salary
            "#,
        )
        .bind(&data.name)
        .bind(&data.role)
        .bind(data.base_salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn update(&self, id: Id, data: &NewWorker) -> RepositoryResult<Option<Worker>> {
        let row = sqlx::query_as::<_, WorkerRow>(
            r#"
            UPDATE workers
            SET name = $2, role = $3, base_salary = $4
            WHERE id = $1
            RETURNING id, name, role, base_salary
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.role)
        .bind(data.base_salary)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Worker::from))
    }

    pub async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
