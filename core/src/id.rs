//! Opaque record identifier.
//!
//! Wraps the store-native 12-byte object id. Outside this crate an id is
//! only ever a 24-character hex string: parse it with `FromStr`, print it
//! with `Display`.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidId;

/// Store-assigned identifier of a single todo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Generate a fresh identifier, unique within this process and with
    /// overwhelming probability across processes.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub(crate) fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TodoId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidId(s.to_string()))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "5f43a1b2c3d4e5f607182930";

    #[test]
    fn parses_and_formats_hex() {
        let id: TodoId = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn uppercase_hex_is_normalized() {
        let id: TodoId = SAMPLE.to_uppercase().parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "not-an-id", "5f43a1b2c3d4e5f60718293", "5f43a1b2c3d4e5f6071829zz", "5f43a1b2c3d4e5f6071829300"] {
            let err = bad.parse::<TodoId>().unwrap_err();
            assert_eq!(err, InvalidId(bad.to_string()));
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = TodoId::generate();
        let b = TodoId::generate();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 24);
    }

    #[test]
    fn serializes_as_json_string() {
        let id: TodoId = SAMPLE.parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(SAMPLE.to_string()));
    }

    #[test]
    fn deserialize_rejects_bad_hex() {
        let result: Result<TodoId, _> = serde_json::from_str(r#""xyz""#);
        assert!(result.is_err());
    }
}
