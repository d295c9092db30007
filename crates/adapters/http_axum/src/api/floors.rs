//! JSON handlers for floors.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use buildhub_app::ports::BuildingStore;
use buildhub_domain::device::Device;
use buildhub_domain::floor::Floor;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Floor>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Floor>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the devices endpoint.
pub enum DevicesResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for DevicesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /floors`
#[utoipa::path(
    get,
    path = "/floors",
    tag = "floors",
    responses((status = 200, description = "Floors in bootstrap order", body = Vec<Floor>))
)]
pub async fn list<S>(State(state): State<AppState<S>>) -> ListResponse
where
    S: BuildingStore + Send + Sync + 'static,
{
    let floors = state.building_service.list_floors().await;
    ListResponse::Ok(Json(floors))
}

/// `GET /floor/{floor_id}`
#[utoipa::path(
    get,
    path = "/floor/{floor_id}",
    tag = "floors",
    params(("floor_id" = String, Path, description = "Floor id, e.g. `piano3`")),
    responses(
        (status = 200, description = "The floor and its devices", body = Floor),
        (status = 400, description = "Unknown floor", body = ErrorBody),
    )
)]
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(floor_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let floor = state.building_service.get_floor(&floor_id).await?;
    Ok(GetResponse::Ok(Json(floor)))
}

/// `GET /floor/{floor_id}/devices`
#[utoipa::path(
    get,
    path = "/floor/{floor_id}/devices",
    tag = "floors",
    params(("floor_id" = String, Path, description = "Floor id, e.g. `piano3`")),
    responses(
        (status = 200, description = "Devices in creation order", body = Vec<Device>),
        (status = 400, description = "Unknown floor", body = ErrorBody),
    )
)]
pub async fn devices<S>(
    State(state): State<AppState<S>>,
    Path(floor_id): Path<String>,
) -> Result<DevicesResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let devices = state.building_service.list_floor_devices(&floor_id).await?;
    Ok(DevicesResponse::Ok(Json(devices)))
}
