//! Worker CRUD service.

use rust_decimal::Decimal;
use sqlx::PgPool;

use wc_core::{Error, WcResult};
use wc_db::{PaginatedResult, Pagination, WorkerRepository};
use wc_models::{NewWorker, Worker, WorkerPatch};

/// Validate worker field invariants. Runs before any write.
pub fn validate_worker(data: &NewWorker) -> WcResult<()> {
    if data.name.trim().is_empty() {
        return Err(Error::validation("name", "can't be blank"));
    }
    if data.base_salary <= Decimal::ZERO {
        return Err(Error::validation("base_salary", "must be greater than zero"));
    }
    Ok(())
}

pub struct WorkerService {
    repo: WorkerRepository,
}

impl WorkerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: WorkerRepository::new(pool),
        }
    }

    pub async fn find(&self, id: i64) -> WcResult<Option<Worker>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list(&self, pagination: Pagination) -> WcResult<PaginatedResult<Worker>> {
        Ok(self.repo.find_all(pagination).await?)
    }

    pub async fn create(&self, data: NewWorker) -> WcResult<Worker> {
        validate_worker(&data)?;
        Ok(self.repo.create(&data).await?)
    }

    pub async fn update(&self, id: i64, patch: WorkerPatch) -> WcResult<Worker> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Worker", id))?;

        let merged = patch.apply(&existing);
        validate_worker(&merged)?;

        self.repo
            .update(id, &merged)
            .await?
            .ok_or_else(|| Error::not_found("Worker", id))
    }

    pub async fn delete(&self, id: i64) -> WcResult<()> {
        if !self.repo.delete(id).await? {
            return Err(Error::not_found("Worker", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive_salary() {
        let data = NewWorker {
            name: "Ana".into(),
            role: "driver".into(),
            base_salary: "0".parse().unwrap(),
        };
        let err = validate_worker(&data).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "base_salary", .. }));
    }

    #[test]
    fn test_validate_accepts_valid_worker() {
        let data = NewWorker {
            name: "Ana".into(),
            role: "driver".into(),
            base_salary: "2400.00".parse().unwrap(),
        };
        assert!(validate_worker(&data).is_ok());
    }
}
