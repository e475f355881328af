//! Result alias for WasteWorks operations.

use crate::error::Error;

/// Standard Result type across the workspace.
pub type WcResult<T> = Result<T, Error>;
