//! # wc-core
//!
//! Core types shared across the WasteWorks crates:
//!
//! - The closed [`Error`](error::Error) taxonomy and [`WcResult`](result::WcResult) alias
//! - Identifier and money types ([`types::Id`], [`types::round_money`])
//! - Boundary serde helpers for string-carried identifiers
//! - Application configuration ([`config::AppConfig`])

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::Error;
pub use result::WcResult;
pub use types::{Id, round_money};
