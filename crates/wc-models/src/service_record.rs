//! Service record entity: one collection event linking a client, a
//! vehicle, and a worker, with its derived cost.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::Id;

use crate::{Client, Vehicle, Worker};

/// A persisted collection-service record.
///
/// `cost` is always derived server-side from the referenced client's rate
/// and the collected volume; it is never accepted from a caller and never
/// carried over unchanged through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Id,
    pub client_id: Id,
    pub vehicle_id: Id,
    pub worker_id: Id,
    pub serviced_on: NaiveDate,
    /// Volume collected, in cubic meters. Invariant: > 0 and not above
    /// the referenced vehicle's capacity.
    pub volume_m3: Decimal,
    /// `round_half_up(volume_m3 × client.rate_per_m3, 2)`.
    pub cost: Decimal,
}

/// Full set of fields written on insert or update, cost included.
///
/// Built only by the service-record workflow after validation, so a value
/// of this type always carries a freshly derived cost.
#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceRecord {
    pub client_id: Id,
    pub vehicle_id: Id,
    pub worker_id: Id,
    pub serviced_on: NaiveDate,
    pub volume_m3: Decimal,
    pub cost: Decimal,
}

/// A service record with its referenced entities resolved, as returned by
/// the joined read operations.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecordDetail {
    pub record: ServiceRecord,
    pub client: Client,
    pub vehicle: Vehicle,
    pub worker: Worker,
}
