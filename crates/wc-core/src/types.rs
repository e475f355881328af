//! Shared identifier and money types.

use rust_decimal::{Decimal, RoundingStrategy};

/// Primary key type for all entities.
pub type Id = i64;

/// Round a monetary amount half-up to exactly 2 fractional digits.
///
/// Service cost is `volume × rate` and both factors carry arbitrary
/// scale, so the product must be brought back to cents in exact decimal
/// arithmetic. The result is rescaled so that "82.5" renders as "82.50".
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Serde helpers carrying identifiers as decimal strings at the JSON
/// boundary. Identifiers may exceed what consumers represent safely as
/// native numbers, so they are never emitted as JSON numbers; on input
/// both string and integer forms are accepted.
pub mod id_string {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    use super::Id;

    pub fn serialize<S: Serializer>(id: &Id, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Id;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer identifier, as a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
            v.parse().map_err(|_| E::custom(format!("invalid identifier: {v:?}")))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
            Id::try_from(v).map_err(|_| E::custom(format!("identifier out of range: {v}")))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Id, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

/// `Option<Id>` variant of [`id_string`], for patch payloads where a
/// missing field means "keep the persisted value".
pub mod id_string_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Id;

    pub fn serialize<S: Serializer>(id: &Option<Id>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.collect_str(id),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Id>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::id_string")] Id);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        // 2.005 * 5 = 10.025, half-up to 10.03
        assert_eq!(round_money(dec("2.005") * dec("5")).to_string(), "10.03");
    }

    #[test]
    fn test_round_money_exact_product() {
        // 3.756 * 10 = 37.56, already at cent precision
        assert_eq!(round_money(dec("3.756") * dec("10")).to_string(), "37.56");
    }

    #[test]
    fn test_round_money_rescales_to_two_digits() {
        assert_eq!(round_money(dec("5.50") * dec("15")).to_string(), "82.50");
        assert_eq!(round_money(dec("82")).to_string(), "82.00");
    }

    #[test]
    fn test_id_string_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Payload {
            #[serde(with = "id_string")]
            id: Id,
        }

        let json = serde_json::to_string(&Payload { id: 9007199254740993 }).unwrap();
        assert_eq!(json, r#"{"id":"9007199254740993"}"#);

        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 9007199254740993);

        // Numeric input is also accepted
        let back: Payload = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(back.id, 42);
    }

    #[test]
    fn test_id_string_opt_absent_is_none() {
        #[derive(serde::Deserialize)]
        struct Patch {
            #[serde(default, with = "id_string_opt")]
            vehicle_id: Option<Id>,
        }

        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.vehicle_id, None);

        let patch: Patch = serde_json::from_str(r#"{"vehicle_id":"7"}"#).unwrap();
        assert_eq!(patch.vehicle_id, Some(7));
    }
}
