//! # wc-db
//!
//! PostgreSQL persistence for WasteWorks, built on SQLx:
//!
//! - Connection pool management
//! - One repository per entity (clients, vehicles, workers, service
//!   records), each mapping rows into `wc-models` types
//! - Joined service-record reads with referenced entities resolved
//!
//! ## Example
//!
//! ```ignore
//! use wc_core::config::DatabaseConfig;
//! use wc_db::{ClientRepository, Database};
//!
//! let db = Database::connect(&DatabaseConfig::default()).await?;
//! let repo = ClientRepository::new(db.pool().clone());
//! let client = repo.find_by_id(1).await?;
//! ```

pub mod clients;
pub mod pool;
pub mod repository;
pub mod service_records;
pub mod vehicles;
pub mod workers;

pub use clients::ClientRepository;
pub use pool::Database;
pub use repository::{PaginatedResult, Pagination, RepositoryError, RepositoryResult};
pub use service_records::ServiceRecordRepository;
pub use vehicles::VehicleRepository;
pub use workers::WorkerRepository;
