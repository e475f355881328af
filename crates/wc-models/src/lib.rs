//! # wc-models
//!
//! Domain models for WasteWorks.
//!
//! Each entity module carries three shapes:
//! - the persisted entity (`Client`, `Vehicle`, ...)
//! - a `New*` struct with the fields a caller supplies on create
//! - a `*Patch` struct of optional fields whose `apply` method makes the
//!   merge-with-existing semantics of partial updates explicit

pub mod client;
pub mod service_record;
pub mod vehicle;
pub mod worker;

pub use client::{Client, ClientKind, ClientPatch, NewClient};
pub use service_record::{NewServiceRecord, ServiceRecord, ServiceRecordDetail};
pub use vehicle::{NewVehicle, Vehicle, VehiclePatch};
pub use worker::{NewWorker, Worker, WorkerPatch};
