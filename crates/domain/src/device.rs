//! Device — a sensor or actuator installed on a floor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::telemetry::Telemetry;

/// Closed set of supported device kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    PresenceSensor,
    LightActuator,
}

impl DeviceType {
    /// Wire token of this device type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PresenceSensor => "presence_sensor",
            Self::LightActuator => "light_actuator",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An IoT endpoint record.
///
/// `id` and `kind` are fixed at creation; `description` and `telemetry` are
/// replaced through the floor that owns the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: DeviceType,
    pub description: String,
    #[serde(default)]
    pub telemetry: Telemetry,
}

impl Device {
    /// Create a device with an empty telemetry bag.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, kind: DeviceType, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
            telemetry: Telemetry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::TelemetryValue;

    #[test]
    fn should_create_device_with_empty_telemetry() {
        let device = Device::new("sensor1", DeviceType::PresenceSensor, "hallway sensor");
        assert_eq!(device.id.as_str(), "sensor1");
        assert_eq!(device.kind, DeviceType::PresenceSensor);
        assert_eq!(device.description, "hallway sensor");
        assert!(device.telemetry.is_empty());
    }

    #[test]
    fn should_serialize_with_type_field() {
        let device = Device::new("light1", DeviceType::LightActuator, "lobby");
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "light1",
                "type": "light_actuator",
                "description": "lobby",
                "telemetry": {}
            })
        );
    }

    #[test]
    fn should_deserialize_without_telemetry() {
        let json = r#"{"id":"pir1","type":"presence_sensor","description":"stairs"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.telemetry.is_empty());
    }

    #[test]
    fn should_keep_telemetry_when_roundtripping() {
        let mut device = Device::new("pir1", DeviceType::PresenceSensor, "stairs");
        device.telemetry.insert("presence", 1_i64);
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.telemetry.get("presence"), Some(&TelemetryValue::Int(1)));
    }

    #[test]
    fn should_roundtrip_device_type_tokens() {
        for kind in [DeviceType::PresenceSensor, DeviceType::LightActuator] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            assert_eq!(serde_json::from_str::<DeviceType>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn should_reject_unknown_device_type() {
        assert!(serde_json::from_str::<DeviceType>("\"thermostat\"").is_err());
        assert!(serde_json::from_str::<DeviceType>("\"PresenceSensor\"").is_err());
    }
}
