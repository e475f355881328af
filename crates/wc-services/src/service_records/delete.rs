//! Delete operation for service records.
//!
//! Deletes are strict: removing an id that does not exist fails with
//! `NotFound`, and repeated deletes of the same id behave the same way
//! every time.

use wc_core::{Error, WcResult};

use crate::store::EntityStore;

/// Service for deleting collection-service records.
pub struct DeleteServiceRecordService<'a, S: EntityStore> {
    store: &'a S,
}

impl<'a, S: EntityStore> DeleteServiceRecordService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn call(&self, id: i64) -> WcResult<()> {
        if !self.store.delete_record(id).await? {
            return Err(Error::not_found("ServiceRecord", id));
        }

        tracing::debug!(record_id = id, "service record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::store::testing::InMemoryStore;

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryStore::new();
        store.put_record(record(10, &params(1, 2, 3, "15"), "82.50"));
        let service = DeleteServiceRecordService::new(&store);

        service.call(10).await.unwrap();
        assert_eq!(store.record_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_consistently_not_found() {
        let store = InMemoryStore::new();
        store.put_record(record(10, &params(1, 2, 3, "15"), "82.50"));
        let service = DeleteServiceRecordService::new(&store);

        service.call(10).await.unwrap();

        // Every subsequent delete of the same id reports the same failure.
        for _ in 0..3 {
            let err = service.call(10).await.unwrap_err();
            assert_eq!(err, Error::not_found("ServiceRecord", 10));
        }
    }
}
