//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod building;
#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod floors;
pub mod openapi;

use axum::Router;
use axum::routing::{get, post, put};

use buildhub_app::ports::BuildingStore;

use crate::state::AppState;

/// Build the API router.
///
/// Paths mirror the building hierarchy: a floor is addressed as
/// `/floor/{floor_id}` and its devices below it.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: BuildingStore + Send + Sync + 'static,
{
    Router::new()
        // Building
        .route("/", get(building::root))
        .route("/building", get(building::get::<S>))
        // Floors
        .route("/floors", get(floors::list::<S>))
        .route("/floor/{floor_id}", get(floors::get::<S>))
        .route("/floor/{floor_id}/devices", get(floors::devices::<S>))
        // Devices
        .route("/floor/{floor_id}/device", put(devices::create::<S>))
        .route(
            "/floor/{floor_id}/device/{device_id}",
            get(devices::get::<S>)
                .post(devices::update_description::<S>)
                .delete(devices::delete::<S>),
        )
        .route(
            "/floor/{floor_id}/telemetry/{device_id}",
            post(devices::update_telemetry::<S>),
        )
}
