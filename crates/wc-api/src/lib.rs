//! # wc-api
//!
//! HTTP surface for WasteWorks: axum handlers, routes, and the mapping
//! from the domain error taxonomy to status codes. Identifiers and
//! decimal amounts cross this boundary as strings, never as floats.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use extractors::AppState;
pub use routes::router;
