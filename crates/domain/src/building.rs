//! Building — the root of the topology, owning a fixed set of floors.

use serde::{Deserialize, Serialize};

use crate::error::BuildingError;
use crate::floor::Floor;
use crate::id::FloorId;

/// Prefix of the floor ids created at start-up.
pub const DEFAULT_FLOOR_PREFIX: &str = "piano";

/// Number of floors created at start-up.
pub const DEFAULT_FLOOR_COUNT: usize = 15;

/// The building and its floors.
///
/// Floors are created once by [`Building::with_floors`] (or the builder) and
/// never added or removed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Building {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    floors: Vec<Floor>,
}

impl Building {
    /// Create a builder for constructing a [`Building`].
    #[must_use]
    pub fn builder() -> BuildingBuilder {
        BuildingBuilder::default()
    }

    /// Unnamed building with `count` empty floors `{prefix}0 … {prefix}{count-1}`.
    #[must_use]
    pub fn with_floors(prefix: &str, count: usize) -> Self {
        Self::builder().floors(prefix, count).build()
    }

    /// The start-up building: unnamed, with [`DEFAULT_FLOOR_COUNT`] floors
    /// named after [`DEFAULT_FLOOR_PREFIX`].
    #[must_use]
    pub fn bootstrap() -> Self {
        Self::with_floors(DEFAULT_FLOOR_PREFIX, DEFAULT_FLOOR_COUNT)
    }

    /// Floors in bootstrap order.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[must_use]
    pub fn find_floor(&self, floor_id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == *floor_id)
    }

    pub fn find_floor_mut(&mut self, floor_id: &str) -> Option<&mut Floor> {
        self.floors.iter_mut().find(|f| f.id == *floor_id)
    }

    /// Resolve a floor, reporting a miss as [`BuildingError::InvalidFloorId`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when no floor has `floor_id`.
    pub fn floor(&self, floor_id: &str) -> Result<&Floor, BuildingError> {
        self.find_floor(floor_id)
            .ok_or_else(|| BuildingError::InvalidFloorId {
                floor_id: floor_id.into(),
            })
    }

    /// Mutable counterpart of [`floor`](Self::floor).
    ///
    /// # Errors
    ///
    /// Returns [`BuildingError::InvalidFloorId`] when no floor has `floor_id`.
    pub fn floor_mut(&mut self, floor_id: &str) -> Result<&mut Floor, BuildingError> {
        self.find_floor_mut(floor_id)
            .ok_or_else(|| BuildingError::InvalidFloorId {
                floor_id: floor_id.into(),
            })
    }
}

/// Step-by-step builder for [`Building`].
#[derive(Debug, Default)]
pub struct BuildingBuilder {
    name: Option<String>,
    address: Option<String>,
    floors: Vec<Floor>,
}

impl BuildingBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Append `count` empty floors numbered from zero with the given prefix.
    #[must_use]
    pub fn floors(mut self, prefix: &str, count: usize) -> Self {
        self.floors
            .extend((0..count).map(|i| Floor::new(FloorId::new(format!("{prefix}{i}")))));
        self
    }

    /// Consume the builder and return the [`Building`].
    #[must_use]
    pub fn build(self) -> Building {
        Building {
            name: self.name.unwrap_or_default(),
            address: self.address,
            floors: self.floors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bootstrap_sequential_empty_floors() {
        let building = Building::bootstrap();

        assert_eq!(building.name, "");
        assert!(building.address.is_none());
        assert_eq!(building.floors().len(), 15);
        assert_eq!(building.floors()[0].id.as_str(), "piano0");
        assert_eq!(building.floors()[14].id.as_str(), "piano14");
        assert!(building.floors().iter().all(|f| f.devices().is_empty()));
    }

    #[test]
    fn should_find_floor_by_exact_id() {
        let building = Building::with_floors("piano", 3);
        assert!(building.find_floor("piano2").is_some());
        assert!(building.find_floor("Piano2").is_none());
        assert!(building.find_floor("piano3").is_none());
    }

    #[test]
    fn should_return_invalid_floor_id_when_floor_missing() {
        let building = Building::with_floors("piano", 15);
        assert_eq!(
            building.floor("piano99"),
            Err(BuildingError::InvalidFloorId {
                floor_id: "piano99".into()
            })
        );
    }

    #[test]
    fn should_build_named_building() {
        let building = Building::builder()
            .name("Office Building A")
            .address("123 Main Street")
            .floors("level", 2)
            .build();
        assert_eq!(building.name, "Office Building A");
        assert_eq!(building.address.as_deref(), Some("123 Main Street"));
        assert_eq!(building.floors()[1].id.as_str(), "level1");
    }

    #[test]
    fn should_serialize_name_address_and_floors() {
        let building = Building::with_floors("piano", 1);
        let json = serde_json::to_value(&building).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "",
                "address": null,
                "floors": [{"id": "piano0", "devices": []}]
            })
        );
    }
}
