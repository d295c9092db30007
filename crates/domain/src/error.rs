//! Error taxonomy for building lookups and mutations.
//!
//! Every failure is a client-input error: a lookup miss or a uniqueness
//! violation. The display strings are the human-readable detail returned to
//! callers.

use crate::id::{DeviceId, FloorId};

/// Failure of a building, floor or device operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildingError {
    /// The referenced floor does not exist in the building.
    #[error("Invalid floor id")]
    InvalidFloorId { floor_id: FloorId },

    /// The referenced device does not exist on an otherwise valid floor.
    #[error("Device not found")]
    DeviceNotFound {
        floor_id: FloorId,
        device_id: DeviceId,
    },

    /// A device with the same id is already registered on the floor.
    #[error("Device ID already exists on this floor")]
    DuplicateDeviceId {
        floor_id: FloorId,
        device_id: DeviceId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_client_facing_details() {
        let floor_id = FloorId::new("piano1");
        let device_id = DeviceId::new("pir10");

        assert_eq!(
            BuildingError::InvalidFloorId {
                floor_id: floor_id.clone()
            }
            .to_string(),
            "Invalid floor id"
        );
        assert_eq!(
            BuildingError::DeviceNotFound {
                floor_id: floor_id.clone(),
                device_id: device_id.clone(),
            }
            .to_string(),
            "Device not found"
        );
        assert_eq!(
            BuildingError::DuplicateDeviceId {
                floor_id,
                device_id
            }
            .to_string(),
            "Device ID already exists on this floor"
        );
    }
}
