//! Telemetry — the last reported state of a device, replaced wholesale on update.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single telemetry value.
///
/// Scalars get their own variant; `null`, arrays and nested objects are kept
/// verbatim as raw JSON so unknown payloads round-trip unchanged. Integers
/// try `Int` first and fall back to `UInt` above `i64::MAX`; only literals
/// with a fraction or exponent land in `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TelemetryValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl From<bool> for TelemetryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TelemetryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for TelemetryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<f64> for TelemetryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TelemetryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TelemetryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Key/value telemetry bag attached to a device.
///
/// Keys keep the order in which they were reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::ToSchema),
    schema(value_type = Object, example = json!({"presence": 1, "battery": 0.93}))
)]
#[serde(transparent)]
pub struct Telemetry(IndexMap<String, TelemetryValue>);

impl Telemetry {
    /// Create an empty telemetry bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TelemetryValue> {
        self.0.get(key)
    }

    /// Insert a value, returning the previous one for that key.
    ///
    /// A new key goes last; overwriting an existing key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TelemetryValue>,
    ) -> Option<TelemetryValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Keys in reporting order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Telemetry
where
    K: Into<String>,
    V: Into<TelemetryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
