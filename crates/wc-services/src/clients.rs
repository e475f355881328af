//! Client CRUD service.

use rust_decimal::Decimal;
use sqlx::PgPool;

use wc_core::{Error, WcResult};
use wc_db::{ClientRepository, PaginatedResult, Pagination};
use wc_models::{Client, ClientPatch, NewClient};

/// Validate client field invariants. Runs before any write.
pub fn validate_client(data: &NewClient) -> WcResult<()> {
    if data.name.trim().is_empty() {
        return Err(Error::validation("name", "can't be blank"));
    }
    if data.rate_per_m3 <= Decimal::ZERO {
        return Err(Error::validation("rate_per_m3", "must be greater than zero"));
    }
    Ok(())
}

/// Service wrapping the client repository with invariant validation and
/// explicit merge semantics on update.
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: ClientRepository::new(pool),
        }
    }

    pub async fn find(&self, id: i64) -> WcResult<Option<Client>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list(&self, pagination: Pagination) -> WcResult<PaginatedResult<Client>> {
        Ok(self.repo.find_all(pagination).await?)
    }

    pub async fn create(&self, data: NewClient) -> WcResult<Client> {
        validate_client(&data)?;
        Ok(self.repo.create(&data).await?)
    }

    pub async fn update(&self, id: i64, patch: ClientPatch) -> WcResult<Client> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Client", id))?;

        let merged = patch.apply(&existing);
        validate_client(&merged)?;

        self.repo
            .update(id, &merged)
            .await?
            .ok_or_else(|| Error::not_found("Client", id))
    }

    pub async fn delete(&self, id: i64) -> WcResult<()> {
        if !self.repo.delete(id).await? {
            return Err(Error::not_found("Client", id));
        }
        Ok(())
    }
}
