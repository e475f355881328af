//! Precondition chain and cost derivation shared by create and update.

use rust_decimal::Decimal;

use wc_core::{round_money, Error, WcResult};

use crate::store::EntityStore;

use super::ServiceRecordParams;

/// Run the ordered precondition chain and return the derived cost.
///
/// Fails fast on the first violation, in this order:
/// 1. volume must be strictly positive
/// 2. the vehicle must exist
/// 3. volume must not exceed the vehicle's capacity
/// 4. the client must exist
/// 5. the worker must exist
///
/// Nothing is written here; callers persist only after this returns.
pub(crate) async fn checked_cost<S: EntityStore>(
    store: &S,
    params: &ServiceRecordParams,
) -> WcResult<Decimal> {
    if params.volume_m3 <= Decimal::ZERO {
        return Err(Error::validation("volume_m3", "must be greater than zero"));
    }

    let vehicle = store
        .find_vehicle(params.vehicle_id)
        .await?
        .ok_or_else(|| Error::not_found("Vehicle", params.vehicle_id))?;

    if params.volume_m3 > vehicle.max_capacity_m3 {
        return Err(Error::CapacityExceeded {
            volume: params.volume_m3,
            capacity: vehicle.max_capacity_m3,
        });
    }

    let client = store
        .find_client(params.client_id)
        .await?
        .ok_or_else(|| Error::not_found("Client", params.client_id))?;

    store
        .find_worker(params.worker_id)
        .await?
        .ok_or_else(|| Error::not_found("Worker", params.worker_id))?;

    Ok(cost_of(params.volume_m3, client.rate_per_m3))
}

/// `round_half_up(volume × rate, 2)`, in exact decimal arithmetic.
pub fn cost_of(volume_m3: Decimal, rate_per_m3: Decimal) -> Decimal {
    round_money(volume_m3 * rate_per_m3)
}
