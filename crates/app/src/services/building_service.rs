//! Building service — use-cases for reading the topology and managing devices.

use buildhub_domain::building::Building;
use buildhub_domain::device::{Device, DeviceType};
use buildhub_domain::error::BuildingError;
use buildhub_domain::floor::Floor;
use buildhub_domain::telemetry::Telemetry;

use crate::ports::BuildingStore;

/// Application service for every building, floor and device operation.
///
/// Per-floor operations resolve the floor first and fail with
/// [`BuildingError::InvalidFloorId`] before looking at devices, so an unknown
/// floor never reports [`BuildingError::DeviceNotFound`]. Every operation
/// takes the store's guard exactly once; failures leave the building unchanged.
pub struct BuildingService<S> {
    store: S,
}

impl<S: BuildingStore> BuildingService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Snapshot of the whole building.
    #[tracing::instrument(skip(self))]
    pub async fn get_building(&self) -> Building {
        self.store.read(Building::clone).await
    }

    /// All floors, in bootstrap order, with their devices.
    #[tracing::instrument(skip(self))]
    pub async fn list_floors(&self) -> Vec<Floor> {
        self.store.read(|building| building.floors().to_vec()).await
    }

    /// Look up a floor by id.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_floor(&self, floor_id: &str) -> Result<Floor, BuildingError> {
        self.store
            .read(|building| building.floor(floor_id).cloned())
            .await
    }

    /// Devices of a floor, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn list_floor_devices(
        &self,
        floor_id: &str,
    ) -> Result<Vec<Device>, BuildingError> {
        self.store
            .read(|building| {
                building
                    .floor(floor_id)
                    .map(|floor| floor.devices().to_vec())
            })
            .await
    }

    /// Look up a device on a floor.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist,
    /// or [`BuildingError::DeviceNotFound`] when the floor has no such device.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(
        &self,
        floor_id: &str,
        device_id: &str,
    ) -> Result<Device, BuildingError> {
        self.store
            .read(|building| {
                building.floor(floor_id).and_then(|floor| {
                    floor.find_device(device_id).cloned().ok_or_else(|| {
                        BuildingError::DeviceNotFound {
                            floor_id: floor.id.clone(),
                            device_id: device_id.into(),
                        }
                    })
                })
            })
            .await
    }

    /// Register a new device, with empty telemetry, at the end of a floor.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist,
    /// or [`BuildingError::DuplicateDeviceId`] when the id is already taken on
    /// that floor.
    #[tracing::instrument(skip(self, description))]
    pub async fn add_device(
        &self,
        floor_id: &str,
        device_id: &str,
        kind: DeviceType,
        description: String,
    ) -> Result<Device, BuildingError> {
        let device = Device::new(device_id, kind, description);
        let created = self
            .store
            .write(|building| {
                building
                    .floor_mut(floor_id)
                    .and_then(|floor| floor.add_device(device).cloned())
            })
            .await?;
        tracing::info!(floor_id, device_id, %kind, "device added");
        Ok(created)
    }

    /// Remove a device from a floor and return a confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist,
    /// or [`BuildingError::DeviceNotFound`] when the floor has no such device.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(
        &self,
        floor_id: &str,
        device_id: &str,
    ) -> Result<String, BuildingError> {
        let removed = self
            .store
            .write(|building| {
                building
                    .floor_mut(floor_id)
                    .and_then(|floor| floor.remove_device(device_id))
            })
            .await?;
        tracing::info!(floor_id, device_id, "device deleted");
        Ok(format!("Device {} deleted successfully", removed.id))
    }

    /// Replace the description of a device.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist,
    /// or [`BuildingError::DeviceNotFound`] when the floor has no such device.
    #[tracing::instrument(skip(self, description))]
    pub async fn update_description(
        &self,
        floor_id: &str,
        device_id: &str,
        description: String,
    ) -> Result<Device, BuildingError> {
        let updated = self
            .store
            .write(|building| {
                let device = building.floor_mut(floor_id)?.device_mut(device_id)?;
                device.description = description;
                Ok::<_, BuildingError>(device.clone())
            })
            .await?;
        tracing::debug!(floor_id, device_id, "device description updated");
        Ok(updated)
    }

    /// Replace the whole telemetry bag of a device; keys are not merged.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when the floor does not exist,
    /// or [`BuildingError::DeviceNotFound`] when the floor has no such device.
    #[tracing::instrument(skip(self, telemetry), fields(keys = telemetry.len()))]
    pub async fn update_telemetry(
        &self,
        floor_id: &str,
        device_id: &str,
        telemetry: Telemetry,
    ) -> Result<Device, BuildingError> {
        let updated = self
            .store
            .write(|building| {
                let device = building.floor_mut(floor_id)?.device_mut(device_id)?;
                device.telemetry = telemetry;
                Ok::<_, BuildingError>(device.clone())
            })
            .await?;
        tracing::debug!(floor_id, device_id, "device telemetry replaced");
        Ok(updated)
    }
}
