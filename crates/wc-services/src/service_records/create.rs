//! Create operation for service records.

use wc_core::WcResult;
use wc_models::{NewServiceRecord, ServiceRecord};

use crate::store::EntityStore;

use super::validate::checked_cost;
use super::ServiceRecordParams;

/// Service for creating collection-service records.
///
/// # Example
/// ```ignore
/// let store = PgEntityStore::new(pool);
/// let service = CreateServiceRecordService::new(&store);
/// let record = service.call(params).await?;
/// ```
pub struct CreateServiceRecordService<'a, S: EntityStore> {
    store: &'a S,
}

impl<'a, S: EntityStore> CreateServiceRecordService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate, derive cost, and persist a new record. Validation fully
    /// precedes the single insert, so a failure leaves nothing behind.
    pub async fn call(&self, params: ServiceRecordParams) -> WcResult<ServiceRecord> {
        let cost = checked_cost(self.store, &params).await?;

        let record = self
            .store
            .insert_record(&NewServiceRecord {
                client_id: params.client_id,
                vehicle_id: params.vehicle_id,
                worker_id: params.worker_id,
                serviced_on: params.serviced_on,
                volume_m3: params.volume_m3,
                cost,
            })
            .await?;

        tracing::debug!(record_id = record.id, cost = %record.cost, "service record created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use wc_core::Error;

    use super::super::fixtures::*;
    use super::*;
    use crate::store::testing::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.put_client(client(1, "5.50"));
        store.put_vehicle(vehicle(2, "20"));
        store.put_worker(worker(3));
        store
    }

    #[tokio::test]
    async fn test_create_computes_cost() {
        let store = seeded_store();
        let service = CreateServiceRecordService::new(&store);

        let record = service.call(params(1, 2, 3, "15")).await.unwrap();
        assert_eq!(record.cost.to_string(), "82.50");
        assert_eq!(record.volume_m3.to_string(), "15");
        assert_eq!(store.record_count(), 1);
    }

    #[tokio::test]
    async fn test_create_rounds_half_up() {
        let store = seeded_store();
        store.put_client(client(4, "2.005"));
        let service = CreateServiceRecordService::new(&store);

        let record = service.call(params(4, 2, 3, "5")).await.unwrap();
        assert_eq!(record.cost.to_string(), "10.03");
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_volume() {
        let store = seeded_store();
        let service = CreateServiceRecordService::new(&store);

        let err = service.call(params(1, 2, 3, "0")).await.unwrap_err();
        assert!(matches!(err, Error::Validation { field: "volume_m3", .. }));
        assert_eq!(store.record_count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_volume_over_capacity() {
        let store = seeded_store();
        let service = CreateServiceRecordService::new(&store);

        // Capacity 20, first record at 15 passes, 25 does not.
        service.call(params(1, 2, 3, "15")).await.unwrap();
        let err = service.call(params(1, 2, 3, "25")).await.unwrap_err();

        match &err {
            Error::CapacityExceeded { volume, capacity } => {
                assert_eq!(volume.to_string(), "25");
                assert_eq!(capacity.to_string(), "20");
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert!(err.to_string().contains("25"));
        assert!(err.to_string().contains("20"));
        assert_eq!(store.record_count(), 1);
    }

    #[tokio::test]
    async fn test_create_names_missing_entity() {
        let store = seeded_store();
        let service = CreateServiceRecordService::new(&store);

        let err = service.call(params(1, 99, 3, "10")).await.unwrap_err();
        assert_eq!(err, Error::not_found("Vehicle", 99));

        let err = service.call(params(99, 2, 3, "10")).await.unwrap_err();
        assert_eq!(err, Error::not_found("Client", 99));

        let err = service.call(params(1, 2, 99, "10")).await.unwrap_err();
        assert_eq!(err, Error::not_found("Worker", 99));

        assert_eq!(store.record_count(), 0);
    }
}
