//! Vehicle CRUD service.

use rust_decimal::Decimal;
use sqlx::PgPool;

use wc_core::{Error, WcResult};
use wc_db::{PaginatedResult, Pagination, VehicleRepository};
use wc_models::{NewVehicle, Vehicle, VehiclePatch};

/// Validate vehicle field invariants. Plate uniqueness is checked
/// separately against the store.
pub fn validate_vehicle(data: &NewVehicle) -> WcResult<()> {
    if data.plate.trim().is_empty() {
        return Err(Error::validation("plate", "can't be blank"));
    }
    if data.max_capacity_m3 <= Decimal::ZERO {
        return Err(Error::validation("max_capacity_m3", "must be greater than zero"));
    }
    if data.fuel_consumption <= Decimal::ZERO {
        return Err(Error::validation("fuel_consumption", "must be greater than zero"));
    }
    Ok(())
}

pub struct VehicleService {
    repo: VehicleRepository,
}

impl VehicleService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: VehicleRepository::new(pool),
        }
    }

    pub async fn find(&self, id: i64) -> WcResult<Option<Vehicle>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list(&self, pagination: Pagination) -> WcResult<PaginatedResult<Vehicle>> {
        Ok(self.repo.find_all(pagination).await?)
    }

    pub async fn create(&self, data: NewVehicle) -> WcResult<Vehicle> {
        validate_vehicle(&data)?;
        self.ensure_plate_free(&data.plate, None).await?;
        Ok(self.repo.create(&data).await?)
    }

    pub async fn update(&self, id: i64, patch: VehiclePatch) -> WcResult<Vehicle> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Vehicle", id))?;

        let merged = patch.apply(&existing);
        validate_vehicle(&merged)?;
        if merged.plate != existing.plate {
            self.ensure_plate_free(&merged.plate, Some(id)).await?;
        }

        self.repo
            .update(id, &merged)
            .await?
            .ok_or_else(|| Error::not_found("Vehicle", id))
    }

    pub async fn delete(&self, id: i64) -> WcResult<()> {
        if !self.repo.delete(id).await? {
            return Err(Error::not_found("Vehicle", id));
        }
        Ok(())
    }

    async fn ensure_plate_free(&self, plate: &str, own_id: Option<i64>) -> WcResult<()> {
        if let Some(other) = self.repo.find_by_plate(plate).await? {
            if own_id != Some(other.id) {
                return Err(Error::validation("plate", "is already taken"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_vehicle(plate: &str, capacity: &str, consumption: &str) -> NewVehicle {
        NewVehicle {
            plate: plate.into(),
            max_capacity_m3: capacity.parse().unwrap(),
            fuel_consumption: consumption.parse().unwrap(),
        }
    }

    #[test]
    fn test_validate_rejects_blank_plate() {
        let err = validate_vehicle(&new_vehicle(" ", "20", "0.35")).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "plate", .. }));
    }

    #[test]
    fn test_validate_rejects_non_positive_capacity() {
        let err = validate_vehicle(&new_vehicle("WC-0001", "0", "0.35")).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "max_capacity_m3", .. }));
    }

    #[test]
    fn test_validate_rejects_non_positive_consumption() {
        let err = validate_vehicle(&new_vehicle("WC-0001", "20", "-0.1")).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "fuel_consumption", .. }));
    }

    #[test]
    fn test_validate_accepts_valid_vehicle() {
        assert!(validate_vehicle(&new_vehicle("WC-0001", "20", "0.35")).is_ok());
    }
}
