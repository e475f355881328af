//! # wc-services
//!
//! Business logic for WasteWorks.
//!
//! The service-record workflow is the one component with cross-entity
//! rules: it validates volume against vehicle capacity and derives cost
//! from the referenced client's rate. It is written against the
//! [`EntityStore`](store::EntityStore) trait so the store handle is
//! injected explicitly; [`store::PgEntityStore`] is the production
//! implementation.
//!
//! Clients, vehicles, and workers have plain CRUD services that enforce
//! their field invariants before any write.

pub mod clients;
pub mod service_records;
pub mod store;
pub mod vehicles;
pub mod workers;

pub use clients::ClientService;
pub use service_records::{
    CreateServiceRecordService, DeleteServiceRecordService, ServiceRecordParams,
    ServiceRecordPatch, UpdateServiceRecordService,
};
pub use store::{EntityStore, PgEntityStore};
pub use vehicles::VehicleService;
pub use workers::WorkerService;
