//! Client entity: a party whose waste is collected, billed per cubic
//! meter at its own rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use wc_core::types::Id;

/// Category of serviced client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientKind {
    Hotel,
    Health,
    House,
}

impl ClientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Hotel => "HOTEL",
            ClientKind::Health => "HEALTH",
            ClientKind::House => "HOUSE",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOTEL" => Ok(ClientKind::Hotel),
            "HEALTH" => Ok(ClientKind::Health),
            "HOUSE" => Ok(ClientKind::House),
            other => Err(format!("unknown client kind: {other:?}")),
        }
    }
}

/// A persisted client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Id,
    pub name: String,
    pub kind: ClientKind,
    pub address: String,
    /// Price charged per cubic meter collected. Invariant: > 0.
    pub rate_per_m3: Decimal,
}

/// Fields supplied when creating a client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub kind: ClientKind,
    pub address: String,
    pub rate_per_m3: Decimal,
}

/// Partial update for a client. Unset fields keep the persisted value.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub kind: Option<ClientKind>,
    pub address: Option<String>,
    pub rate_per_m3: Option<Decimal>,
}

impl ClientPatch {
    /// Merge this patch over an existing client into the full set of
    /// effective fields.
    pub fn apply(self, existing: &Client) -> NewClient {
        NewClient {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            kind: self.kind.unwrap_or(existing.kind),
            address: self.address.unwrap_or_else(|| existing.address.clone()),
            rate_per_m3: self.rate_per_m3.unwrap_or(existing.rate_per_m3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [ClientKind::Hotel, ClientKind::Health, ClientKind::House] {
            assert_eq!(kind.as_str().parse::<ClientKind>().unwrap(), kind);
        }
        assert!("OFFICE".parse::<ClientKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uppercase() {
        assert_eq!(serde_json::to_string(&ClientKind::Health).unwrap(), "\"HEALTH\"");
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let existing = Client {
            id: 1,
            name: "Grand Hotel".into(),
            kind: ClientKind::Hotel,
            address: "1 Seaside Ave".into(),
            rate_per_m3: "5.50".parse().unwrap(),
        };

        let merged = ClientPatch {
            rate_per_m3: Some("6.00".parse().unwrap()),
            ..Default::default()
        }
        .apply(&existing);

        assert_eq!(merged.name, "Grand Hotel");
        assert_eq!(merged.kind, ClientKind::Hotel);
        assert_eq!(merged.rate_per_m3, "6.00".parse().unwrap());
    }
}
