//! Update operation for service records.

use wc_core::{Error, WcResult};
use wc_models::{NewServiceRecord, ServiceRecord};

use crate::store::EntityStore;

use super::validate::checked_cost;
use super::ServiceRecordPatch;

/// Service for updating collection-service records.
///
/// Unsupplied fields take their persisted value, and the full
/// precondition chain re-runs against the merged values: changing only
/// the vehicle re-validates the existing volume against the new
/// capacity, and cost is always recomputed from the effective client
/// rate and volume.
pub struct UpdateServiceRecordService<'a, S: EntityStore> {
    store: &'a S,
}

impl<'a, S: EntityStore> UpdateServiceRecordService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn call(&self, id: i64, patch: ServiceRecordPatch) -> WcResult<ServiceRecord> {
        let existing = self
            .store
            .find_record(id)
            .await?
            .ok_or_else(|| Error::not_found("ServiceRecord", id))?;

        let params = patch.apply(&existing);
        let cost = checked_cost(self.store, &params).await?;

        let updated = self
            .store
            .update_record(
                id,
                &NewServiceRecord {
                    client_id: params.client_id,
                    vehicle_id: params.vehicle_id,
                    worker_id: params.worker_id,
                    serviced_on: params.serviced_on,
                    volume_m3: params.volume_m3,
                    cost,
                },
            )
            .await?
            // Raced with a delete between the read and the write.
            .ok_or_else(|| Error::not_found("ServiceRecord", id))?;

        tracing::debug!(record_id = id, cost = %updated.cost, "service record updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::store::testing::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.put_client(client(1, "5.50"));
        store.put_vehicle(vehicle(2, "20"));
        store.put_worker(worker(3));
        store.put_record(record(10, &params(1, 2, 3, "15"), "82.50"));
        store
    }

    #[tokio::test]
    async fn test_update_missing_record_fails_before_merge() {
        let store = seeded_store();
        let service = UpdateServiceRecordService::new(&store);

        let err = service.call(404, ServiceRecordPatch::default()).await.unwrap_err();
        assert_eq!(err, Error::not_found("ServiceRecord", 404));
    }

    #[tokio::test]
    async fn test_update_volume_recomputes_cost() {
        let store = seeded_store();
        let service = UpdateServiceRecordService::new(&store);

        let updated = service
            .call(
                10,
                ServiceRecordPatch {
                    volume_m3: Some(dec("10")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.volume_m3.to_string(), "10");
        assert_eq!(updated.cost.to_string(), "55.00");
    }

    #[tokio::test]
    async fn test_update_client_recomputes_cost_from_new_rate() {
        let store = seeded_store();
        store.put_client(client(5, "3.756"));
        let service = UpdateServiceRecordService::new(&store);

        let updated = service
            .call(
                10,
                ServiceRecordPatch {
                    client_id: Some(5),
                    volume_m3: Some(dec("10")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.cost.to_string(), "37.56");
    }

    #[tokio::test]
    async fn test_update_vehicle_revalidates_existing_volume() {
        // Record carries volume 15; the replacement vehicle only takes 10.
        let store = seeded_store();
        store.put_vehicle(vehicle(7, "10"));
        let service = UpdateServiceRecordService::new(&store);

        let err = service
            .call(
                10,
                ServiceRecordPatch {
                    vehicle_id: Some(7),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        match err {
            Error::CapacityExceeded { volume, capacity } => {
                assert_eq!(volume.to_string(), "15");
                assert_eq!(capacity.to_string(), "10");
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_patch_still_revalidates() {
        // The vehicle shrank since the record was written; an update that
        // changes nothing must still notice.
        let store = seeded_store();
        store.put_vehicle(vehicle(2, "10"));
        let service = UpdateServiceRecordService::new(&store);

        let err = service.call(10, ServiceRecordPatch::default()).await.unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }));
    }

    #[tokio::test]
    async fn test_update_rejects_non_positive_volume() {
        let store = seeded_store();
        let service = UpdateServiceRecordService::new(&store);

        let err = service
            .call(
                10,
                ServiceRecordPatch {
                    volume_m3: Some(dec("-1")),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "volume_m3", .. }));

        // Persisted record is untouched.
        let unchanged = store.find_record(10).await.unwrap().unwrap();
        assert_eq!(unchanged.cost.to_string(), "82.50");
    }
}
