//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the full record as returned to clients. `TodoFields` is the
//! client-writable part, shared by create and update payloads: the store is
//! the sole authority for ids, so a client-supplied `id` is simply not part
//! of the shape and gets ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::TodoId;

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, fields: TodoFields) -> Self {
        Self {
            id,
            text: fields.text,
            completed: fields.completed,
        }
    }
}

/// Writable fields of a todo. Missing or `null` `text` decodes as an empty
/// string and missing or `null` `completed` as `false`; no other validation
/// is performed. Capitalized keys (`Text`, `Completed`) are accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoFields {
    #[serde(alias = "Text", deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(alias = "Completed", deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
