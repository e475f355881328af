//! Error taxonomy for WasteWorks operations.
//!
//! A single closed enum so callers can exhaustively match every failure
//! kind. Validation always precedes persistence, so a failed operation
//! leaves no partial state behind.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Id;

/// Error type for all WasteWorks operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An input violates a business invariant (non-positive amount,
    /// blank name, duplicate plate).
    #[error("validation failed: {field} {message}")]
    Validation { field: &'static str, message: String },

    /// A referenced identifier does not resolve to an existing entity.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Id },

    /// Collected volume exceeds the vehicle's maximum capacity. Carries
    /// both the attempted value and the limit for diagnosability.
    #[error("volume {volume} m3 exceeds vehicle capacity of {capacity} m3")]
    CapacityExceeded { volume: Decimal, capacity: Decimal },

    /// The underlying store failed for reasons unrelated to business
    /// rules. Opaque to callers; never retried.
    #[error("persistence failure: {message}")]
    Persistence { message: String },
}

impl Error {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: Id) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Error::Persistence {
            message: message.into(),
        }
    }

    /// HTTP status code mapping for the transport layer.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation { .. } => 422,
            Error::NotFound { .. } => 404,
            Error::CapacityExceeded { .. } => 422,
            Error::Persistence { .. } => 500,
        }
    }

    /// Stable machine-readable identifier for API error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "validation_failed",
            Error::NotFound { .. } => "not_found",
            Error::CapacityExceeded { .. } => "capacity_exceeded",
            Error::Persistence { .. } => "persistence_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::validation("volume_m3", "must be positive").status_code(), 422);
        assert_eq!(Error::not_found("Vehicle", 9).status_code(), 404);
        assert_eq!(
            Error::CapacityExceeded {
                volume: "25".parse().unwrap(),
                capacity: "20".parse().unwrap(),
            }
            .status_code(),
            422
        );
        assert_eq!(Error::persistence("pool closed").status_code(), 500);
    }

    #[test]
    fn test_capacity_message_names_both_values() {
        let err = Error::CapacityExceeded {
            volume: "25".parse().unwrap(),
            capacity: "20".parse().unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = Error::not_found("Client", 42);
        assert_eq!(err.to_string(), "Client with id 42 not found");
        assert_eq!(err.error_code(), "not_found");
    }
}
