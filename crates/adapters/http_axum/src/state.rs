//! Shared application state for axum handlers.

use std::sync::Arc;

use buildhub_app::ports::BuildingStore;
use buildhub_app::services::building_service::BuildingService;

/// Application state shared across all axum handlers.
///
/// Generic over the building store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Building, floor and device operations.
    pub building_service: Arc<BuildingService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            building_service: Arc::clone(&self.building_service),
        }
    }
}

impl<S> AppState<S>
where
    S: BuildingStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(building_service: BuildingService<S>) -> Self {
        Self {
            building_service: Arc::new(building_service),
        }
    }
}
