//! JSON encoding for snapshot payloads, plus the serde helpers the wire
//! types share.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SnapshotError;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, SnapshotError> {
    Ok(serde_json::from_str(text)?)
}

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode `null` as the type's default. Older servers send `null` for
/// hidden hands and missing avatars.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Seat positions travel as integers where `-1` (or `null`) means "none".
pub(crate) mod optional_seat {
    use super::*;

    pub fn serialize<S: Serializer>(seat: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match seat {
            Some(position) => serializer.serialize_u64(*position as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = Option::<i64>::deserialize(deserializer)?;
        Ok(raw.and_then(|v| usize::try_from(v).ok()))
    }
}
