//! Service-record workflow: validation, cost derivation, persistence.
//!
//! One module per operation, sharing the precondition chain in
//! [`validate`]. Create and update both run the full chain against the
//! effective field values, so a partial update that touches nothing
//! still re-checks the existing volume against the existing vehicle.

mod create;
mod delete;
mod update;
mod validate;

pub use create::CreateServiceRecordService;
pub use delete::DeleteServiceRecordService;
pub use update::UpdateServiceRecordService;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use wc_core::types::Id;
use wc_models::ServiceRecord;

/// Effective field values a service record is validated and priced
/// against. Cost is intentionally absent: it is derived, never supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecordParams {
    pub client_id: Id,
    pub vehicle_id: Id,
    pub worker_id: Id,
    pub serviced_on: NaiveDate,
    pub volume_m3: Decimal,
}

/// Partial update for a service record. Unset fields take the persisted
/// value, volume included, with no precision loss on the way back out of
/// the store.
#[derive(Debug, Clone, Default)]
pub struct ServiceRecordPatch {
    pub client_id: Option<Id>,
    pub vehicle_id: Option<Id>,
    pub worker_id: Option<Id>,
    pub serviced_on: Option<NaiveDate>,
    pub volume_m3: Option<Decimal>,
}

impl ServiceRecordPatch {
    /// Merge this patch over the persisted record into the effective
    /// values the validation chain runs against.
    pub fn apply(self, existing: &ServiceRecord) -> ServiceRecordParams {
        ServiceRecordParams {
            client_id: self.client_id.unwrap_or(existing.client_id),
            vehicle_id: self.vehicle_id.unwrap_or(existing.vehicle_id),
            worker_id: self.worker_id.unwrap_or(existing.worker_id),
            serviced_on: self.serviced_on.unwrap_or(existing.serviced_on),
            volume_m3: self.volume_m3.unwrap_or(existing.volume_m3),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use wc_models::{Client, ClientKind, ServiceRecord, Vehicle, Worker};

    use super::*;

    pub(crate) fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    pub(crate) fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    pub(crate) fn client(id: Id, rate: &str) -> Client {
        Client {
            id,
            name: format!("Client {id}"),
            kind: ClientKind::Hotel,
            address: "1 Seaside Ave".into(),
            rate_per_m3: dec(rate),
        }
    }

    pub(crate) fn vehicle(id: Id, capacity: &str) -> Vehicle {
        Vehicle {
            id,
            plate: format!("WC-{id:04}"),
            max_capacity_m3: dec(capacity),
            fuel_consumption: dec("0.35"),
        }
    }

    pub(crate) fn worker(id: Id) -> Worker {
        Worker {
            id,
            name: format!("Worker {id}"),
            role: "driver".into(),
            base_salary: dec("2400.00"),
        }
    }

    pub(crate) fn params(client_id: Id, vehicle_id: Id, worker_id: Id, volume: &str) -> ServiceRecordParams {
        ServiceRecordParams {
            client_id,
            vehicle_id,
            worker_id,
            serviced_on: date("2026-03-14"),
            volume_m3: dec(volume),
        }
    }

    pub(crate) fn record(id: Id, params: &ServiceRecordParams, cost: &str) -> ServiceRecord {
        ServiceRecord {
            id,
            client_id: params.client_id,
            vehicle_id: params.vehicle_id,
            worker_id: params.worker_id,
            serviced_on: params.serviced_on,
            volume_m3: params.volume_m3,
            cost: dec(cost),
        }
    }
}
