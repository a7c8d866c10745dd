//! Deserialization helpers that turn unusable values into `None`.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Deserializes `T`, yielding `None` for `null` or a value of the wrong
/// shape.
pub(super) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a list of `T`, dropping elements of the wrong shape.
///
/// Yields `None` when the value is `null` or not a list.
pub(super) fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(elements) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        elements
            .into_iter()
            .filter_map(|element| serde_json::from_value(element).ok())
            .collect(),
    ))
}
