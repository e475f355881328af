//! Worker entity: a crew member assigned to collection services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::Id;

/// A persisted worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Id,
    pub name: String,
    pub role: String,
    /// Monthly base salary. Invariant: > 0.
    pub base_salary: Decimal,
}

/// Fields supplied when creating a worker.
#[derive(Debug, Clone)]
pub struct NewWorker {
    pub name: String,
    pub role: String,
    pub base_salary: Decimal,
}

/// Partial update for a worker. Unset fields keep the persisted value.
#[derive(Debug, Clone, Default)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub base_salary: Option<Decimal>,
}

impl WorkerPatch {
    pub fn apply(self, existing: &Worker) -> NewWorker {
        NewWorker {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            role: self.role.unwrap_or_else(|| existing.role.clone()),
            base_salary: self.base_salary.unwrap_or(existing.base_salary),
        }
    }
}
