//! Floor — an ordered registry of the devices installed on one level.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::BuildingError;
use crate::id::FloorId;

/// A named partition of the building owning its devices.
///
/// Devices are kept in creation order and their ids are unique within the
/// floor. Lookups scan linearly with exact, case-sensitive matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Floor {
    pub id: FloorId,
    #[serde(default)]
    devices: Vec<Device>,
}

impl Floor {
    /// Create an empty floor.
    #[must_use]
    pub fn new(id: impl Into<FloorId>) -> Self {
        Self {
            id: id.into(),
            devices: Vec::new(),
        }
    }

    /// Devices in creation order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    #[must_use]
    pub fn find_device(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == *device_id)
    }

    pub fn find_device_mut(&mut self, device_id: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == *device_id)
    }

    /// Like [`find_device_mut`](Self::find_device_mut), but reports a miss as
    /// [`BuildingError::DeviceNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::DeviceNotFound`] when no device has `device_id`.
    pub fn device_mut(&mut self, device_id: &str) -> Result<&mut Device, BuildingError> {
        let floor_id = self.id.clone();
        self.find_device_mut(device_id)
            .ok_or_else(|| BuildingError::DeviceNotFound {
                floor_id,
                device_id: device_id.into(),
            })
    }

    /// Append a device at the end of the floor.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::DuplicateDeviceId`] when a device with the
    /// same id is already registered; the floor is left untouched.
    pub fn add_device(&mut self, device: Device) -> Result<&Device, BuildingError> {
        if self.find_device(device.id.as_str()).is_some() {
            return Err(BuildingError::DuplicateDeviceId {
                floor_id: self.id.clone(),
                device_id: device.id,
            });
        }
        self.devices.push(device);
        Ok(&self.devices[self.devices.len() - 1])
    }

    /// Remove a device, keeping the relative order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::DeviceNotFound`] when no device has `device_id`.
    pub fn remove_device(&mut self, device_id: &str) -> Result<Device, BuildingError> {
        let Some(index) = self.devices.iter().position(|d| d.id == *device_id) else {
            return Err(BuildingError::DeviceNotFound {
                floor_id: self.id.clone(),
                device_id: device_id.into(),
            });
        };
        Ok(self.devices.remove(index))
    }
}
