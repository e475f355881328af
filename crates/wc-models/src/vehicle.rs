//! Vehicle entity: a collection truck with a hard volume capacity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wc_core::types::Id;

/// A persisted vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Id,
    /// License plate. Invariant: unique across the fleet.
    pub plate: String,
    /// Maximum volume carried per service record, in cubic meters.
    /// Invariant: > 0.
    pub max_capacity_m3: Decimal,
    /// Fuel consumption in litres per kilometer. Invariant: > 0.
    pub fuel_consumption: Decimal,
}

/// Fields supplied when creating a vehicle.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub plate: String,
    pub max_capacity_m3: Decimal,
    pub fuel_consumption: Decimal,
}

/// Partial update for a vehicle. Unset fields keep the persisted value.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub plate: Option<String>,
    pub max_capacity_m3: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
}

impl VehiclePatch {
    pub fn apply(self, existing: &Vehicle) -> NewVehicle {
        NewVehicle {
            plate: self.plate.unwrap_or_else(|| existing.plate.clone()),
            max_capacity_m3: self.max_capacity_m3.unwrap_or(existing.max_capacity_m3),
            fuel_consumption: self.fuel_consumption.unwrap_or(existing.fuel_consumption),
        }
    }
}
