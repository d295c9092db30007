//! In-process building store backed by a tokio [`RwLock`].

use tokio::sync::RwLock;

use buildhub_domain::building::Building;

use crate::ports::BuildingStore;

/// Keeps the building in memory for the lifetime of the process.
///
/// Reads share the lock, mutations take it exclusively. Nothing is persisted:
/// a restart starts again from whatever building is passed to [`new`](Self::new).
pub struct InMemoryBuildingStore {
    building: RwLock<Building>,
}

impl InMemoryBuildingStore {
    /// Create a store owning `building`.
    #[must_use]
    pub fn new(building: Building) -> Self {
        Self {
            building: RwLock::new(building),
        }
    }
}

impl Default for InMemoryBuildingStore {
    fn default() -> Self {
        Self::new(Building::bootstrap())
    }
}

impl BuildingStore for InMemoryBuildingStore {
    async fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Building) -> R + Send,
        R: Send,
    {
        let building = self.building.read().await;
        f(&building)
    }

    async fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Building) -> R + Send,
        R: Send,
    {
        let mut building = self.building.write().await;
        f(&mut building)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildhub_domain::device::{Device, DeviceType};
    use std::sync::Arc;

    #[tokio::test]
    async fn should_start_from_bootstrap_building_by_default() {
        let store = InMemoryBuildingStore::default();
        let count = store.read(|b| b.floors().len()).await;
        assert_eq!(count, 15);
    }

    #[tokio::test]
    async fn should_expose_writes_to_later_reads() {
        let store = InMemoryBuildingStore::new(Building::with_floors("piano", 2));

        let device = Device::new("pir1", DeviceType::PresenceSensor, "");
        store
            .write(|b| {
                b.floor_mut("piano1")
                    .and_then(|f| f.add_device(device).map(|_| ()))
            })
            .await
            .unwrap();

        let found = store
            .read(|b| {
                b.find_floor("piano1")
                    .and_then(|f| f.find_device("pir1"))
                    .is_some()
            })
            .await;
        assert!(found);
    }

    #[tokio::test]
    async fn should_share_state_through_arc() {
        let store = Arc::new(InMemoryBuildingStore::new(Building::with_floors("f", 1)));
        let other = Arc::clone(&store);

        other.write(|b| b.name = "HQ".to_string()).await;

        assert_eq!(store.read(|b| b.name.clone()).await, "HQ");
    }
}
