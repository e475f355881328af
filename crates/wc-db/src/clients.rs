//! Client repository.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use wc_core::types::Id;
use wc_models::{Client, ClientKind, NewClient};

use crate::repository::{PaginatedResult, Pagination, RepositoryError, RepositoryResult};

/// Client database row. Kind is stored as TEXT and parsed on the way out.
#[derive(Debug, Clone, FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    kind: String,
    address: String,
    rate_per_m3: Decimal,
}

impl TryFrom<ClientRow> for Client {
    type Error = RepositoryError;

    fn try_from(row: ClientRow) -> RepositoryResult<Client> {
        let kind: ClientKind = row.kind.parse().map_err(RepositoryError::Conversion)?;
        Ok(Client {
            id: row.id,
            name: row.name,
            kind,
            address: row.address,
            rate_per_m3: row.rate_per_m3,
        })
    }
}

/// Client repository implementation.
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, kind, address, rate_per_m3 FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Client::try_from).transpose()
    }

    pub async fn find_all(&self, pagination: Pagination) -> RepositoryResult<PaginatedResult<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, kind, address, rate_per_m3
            FROM clients
            ORDER BY name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(Client::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn create(&self, data: &NewClient) -> RepositoryResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, kind, address, rate_per_m3)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, kind, address, rate_per_m3
            "#,
        )
        .bind(&data.name)
        .bind(data.kind.as_str())
        .bind(&data.address)
        .bind(data.rate_per_m3)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    /// Write the full effective field set. Returns `None` when the id
    /// does not exist.
    pub async fn update(&self, id: Id, data: &NewClient) -> RepositoryResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients
            SET name = $2, kind = $3, address = $4, rate_per_m3 = $5
            WHERE id = $1
            RETURNING id, name, kind, address, rate_per_m3
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.kind.as_str())
        .bind(&data.address)
        .bind(data.rate_per_m3)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Client::try_from).transpose()
    }

    /// Returns whether a row was deleted.
    pub async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
