//! JSON wire conversion helpers.
//!
//! Thin wrappers over the `serde_json` engine that attach the record type to
//! conversion errors, so a failed parse reads
//! `failed to deserialize RiskModel: missing field `vendor``.

use crate::error::{Result, SchemaError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Last path segment of a type name: `RiskModel` for
/// `riskmodels::model::RiskModel`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Serialize a record to its JSON wire object.
pub fn to_value<T: Serialize>(record: &T) -> Result<serde_json::Value> {
    serde_json::to_value(record).map_err(|source| SchemaError::Serialize {
        record: short_type_name::<T>(),
        source,
    })
}

/// Serialize a record to a JSON string.
pub fn to_string<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(|source| SchemaError::Serialize {
        record: short_type_name::<T>(),
        source,
    })
}

/// Deserialize a record from a JSON wire object.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| SchemaError::Deserialize {
        record: short_type_name::<T>(),
        source,
    })
}

/// Deserialize a record from a JSON string.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| SchemaError::Deserialize {
        record: short_type_name::<T>(),
        source,
    })
}
