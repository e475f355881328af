//! Entity store seam for the service-record workflow.
//!
//! The workflow only needs lookups for its referenced entities and CRUD
//! on records, so that is all the trait exposes. The handle is
//! constructed explicitly and passed in; nothing holds a process-wide
//! connection singleton.

use async_trait::async_trait;
use sqlx::PgPool;

use wc_core::types::Id;
use wc_core::WcResult;
use wc_models::{Client, NewServiceRecord, ServiceRecord, Vehicle, Worker};

use wc_db::{ClientRepository, ServiceRecordRepository, VehicleRepository, WorkerRepository};

/// Persistence contract consumed by the service-record workflow.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_client(&self, id: Id) -> WcResult<Option<Client>>;

    async fn find_vehicle(&self, id: Id) -> WcResult<Option<Vehicle>>;

    async fn find_worker(&self, id: Id) -> WcResult<Option<Worker>>;

    async fn find_record(&self, id: Id) -> WcResult<Option<ServiceRecord>>;

    async fn insert_record(&self, data: &NewServiceRecord) -> WcResult<ServiceRecord>;

    /// Returns `None` when the record id does not exist.
    async fn update_record(
        &self,
        id: Id,
        data: &NewServiceRecord,
    ) -> WcResult<Option<ServiceRecord>>;

    /// Returns whether a record was deleted.
    async fn delete_record(&self, id: Id) -> WcResult<bool>;
}

/// PostgreSQL-backed store bridging to the `wc-db` repositories.
#[derive(Clone)]
pub struct PgEntityStore {
    pool: PgPool,
}

impl PgEntityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn find_client(&self, id: Id) -> WcResult<Option<Client>> {
        Ok(ClientRepository::new(self.pool.clone()).find_by_id(id).await?)
    }

    async fn find_vehicle(&self, id: Id) -> WcResult<Option<Vehicle>> {
        Ok(VehicleRepository::new(self.pool.clone()).find_by_id(id).await?)
    }

    async fn find_worker(&self, id: Id) -> WcResult<Option<Worker>> {
        Ok(WorkerRepository::new(self.pool.clone()).find_by_id(id).await?)
    }

    async fn find_record(&self, id: Id) -> WcResult<Option<ServiceRecord>> {
        Ok(ServiceRecordRepository::new(self.pool.clone()).find_by_id(id).await?)
    }

    async fn insert_record(&self, data: &NewServiceRecord) -> WcResult<ServiceRecord> {
        Ok(ServiceRecordRepository::new(self.pool.clone()).create(data).await?)
    }

    async fn update_record(
        &self,
        id: Id,
        data: &NewServiceRecord,
    ) -> WcResult<Option<ServiceRecord>> {
        Ok(ServiceRecordRepository::new(self.pool.clone()).update(id, data).await?)
    }

    async fn delete_record(&self, id: Id) -> WcResult<bool> {
        Ok(ServiceRecordRepository::new(self.pool.clone()).delete(id).await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store for workflow tests.

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub(crate) struct InMemoryStore {
        clients: Mutex<HashMap<Id, Client>>,
        vehicles: Mutex<HashMap<Id, Vehicle>>,
        workers: Mutex<HashMap<Id, Worker>>,
        records: Mutex<HashMap<Id, ServiceRecord>>,
        next_id: AtomicI64,
    }

    impl InMemoryStore {
        pub(crate) fn new() -> Self {
            Self {
                next_id: AtomicI64::new(1),
                ..Default::default()
            }
        }

        pub(crate) fn put_client(&self, client: Client) {
            self.clients.lock().unwrap().insert(client.id, client);
        }

        pub(crate) fn put_vehicle(&self, vehicle: Vehicle) {
            self.vehicles.lock().unwrap().insert(vehicle.id, vehicle);
        }

        pub(crate) fn put_worker(&self, worker: Worker) {
            self.workers.lock().unwrap().insert(worker.id, worker);
        }

        pub(crate) fn put_record(&self, record: ServiceRecord) {
            self.records.lock().unwrap().insert(record.id, record);
        }

        pub(crate) fn record_count(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EntityStore for InMemoryStore {
        async fn find_client(&self, id: Id) -> WcResult<Option<Client>> {
            Ok(self.clients.lock().unwrap().get(&id).cloned())
        }

        async fn find_vehicle(&self, id: Id) -> WcResult<Option<Vehicle>> {
            Ok(self.vehicles.lock().unwrap().get(&id).cloned())
        }

        async fn find_worker(&self, id: Id) -> WcResult<Option<Worker>> {
            Ok(self.workers.lock().unwrap().get(&id).cloned())
        }

        async fn find_record(&self, id: Id) -> WcResult<Option<ServiceRecord>> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn insert_record(&self, data: &NewServiceRecord) -> WcResult<ServiceRecord> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let record = ServiceRecord {
                id,
                client_id: data.client_id,
                vehicle_id: data.vehicle_id,
                worker_id: data.worker_id,
                serviced_on: data.serviced_on,
                volume_m3: data.volume_m3,
                cost: data.cost,
            };
            self.records.lock().unwrap().insert(id, record.clone());
            Ok(record)
        }

        async fn update_record(
            &self,
            id: Id,
            data: &NewServiceRecord,
        ) -> WcResult<Option<ServiceRecord>> {
            let mut records = self.records.lock().unwrap();
            if !records.contains_key(&id) {
                return Ok(None);
            }
            let record = ServiceRecord {
                id,
                client_id: data.client_id,
                vehicle_id: data.vehicle_id,
                worker_id: data.worker_id,
                serviced_on: data.serviced_on,
                volume_m3: data.volume_m3,
                cost: data.cost,
            };
            records.insert(id, record.clone());
            Ok(Some(record))
        }

        async fn delete_record(&self, id: Id) -> WcResult<bool> {
            Ok(self.records.lock().unwrap().remove(&id).is_some())
        }
    }
}
