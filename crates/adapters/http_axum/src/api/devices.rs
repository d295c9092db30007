//! JSON handlers for the devices of a floor.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use utoipa::IntoParams;

use buildhub_app::ports::BuildingStore;
use buildhub_domain::device::{Device, DeviceType};
use buildhub_domain::telemetry::Telemetry;

use crate::api::building::MessageResponse;
use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Query string for registering a device; every field is required.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateDeviceQuery {
    pub device_type: DeviceType,
    pub device_id: String,
    pub device_description: String,
}

/// Query string for replacing a device description.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateDescriptionQuery {
    pub description: String,
}

/// Possible responses from endpoints returning a single device.
pub enum DeviceResponse {
    Ok(Json<Device>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageResponse>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /floor/{floor_id}/device/{device_id}`
#[utoipa::path(
    get,
    path = "/floor/{floor_id}/device/{device_id}",
    tag = "devices",
    params(
        ("floor_id" = String, Path, description = "Floor id, e.g. `piano3`"),
        ("device_id" = String, Path, description = "Device id, unique on its floor"),
    ),
    responses(
        (status = 200, description = "The device", body = Device),
        (status = 400, description = "Unknown floor", body = ErrorBody),
        (status = 404, description = "Unknown device", body = ErrorBody),
    )
)]
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path((floor_id, device_id)): Path<(String, String)>,
) -> Result<DeviceResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let device = state
        .building_service
        .get_device(&floor_id, &device_id)
        .await?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `PUT /floor/{floor_id}/device?device_type=…&device_id=…&device_description=…`
#[utoipa::path(
    put,
    path = "/floor/{floor_id}/device",
    tag = "devices",
    params(
        ("floor_id" = String, Path, description = "Floor id, e.g. `piano3`"),
        CreateDeviceQuery,
    ),
    responses(
        (status = 200, description = "The registered device", body = Device),
        (status = 400, description = "Unknown floor or duplicate device id", body = ErrorBody),
    )
)]
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(floor_id): Path<String>,
    Query(query): Query<CreateDeviceQuery>,
) -> Result<DeviceResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let device = state
        .building_service
        .add_device(
            &floor_id,
            &query.device_id,
            query.device_type,
            query.device_description,
        )
        .await?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `DELETE /floor/{floor_id}/device/{device_id}`
#[utoipa::path(
    delete,
    path = "/floor/{floor_id}/device/{device_id}",
    tag = "devices",
    params(
        ("floor_id" = String, Path, description = "Floor id, e.g. `piano3`"),
        ("device_id" = String, Path, description = "Device id, unique on its floor"),
    ),
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 400, description = "Unknown floor", body = ErrorBody),
        (status = 404, description = "Unknown device", body = ErrorBody),
    )
)]
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path((floor_id, device_id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let message = state
        .building_service
        .delete_device(&floor_id, &device_id)
        .await?;
    Ok(DeleteResponse::Ok(Json(MessageResponse::new(message))))
}

/// `POST /floor/{floor_id}/device/{device_id}?description=…`
#[utoipa::path(
    post,
    path = "/floor/{floor_id}/device/{device_id}",
    tag = "devices",
    params(
        ("floor_id" = String, Path, description = "Floor id, e.g. `piano3`"),
        ("device_id" = String, Path, description = "Device id, unique on its floor"),
        UpdateDescriptionQuery,
    ),
    responses(
        (status = 200, description = "The updated device", body = Device),
        (status = 400, description = "Unknown floor", body = ErrorBody),
        (status = 404, description = "Unknown device", body = ErrorBody),
    )
)]
pub async fn update_description<S>(
    State(state): State<AppState<S>>,
    Path((floor_id, device_id)): Path<(String, String)>,
    Query(query): Query<UpdateDescriptionQuery>,
) -> Result<DeviceResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let device = state
        .building_service
        .update_description(&floor_id, &device_id, query.description)
        .await?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `POST /floor/{floor_id}/telemetry/{device_id}` with a JSON object body.
#[utoipa::path(
    post,
    path = "/floor/{floor_id}/telemetry/{device_id}",
    tag = "devices",
    params(
        ("floor_id" = String, Path, description = "Floor id, e.g. `piano3`"),
        ("device_id" = String, Path, description = "Device id, unique on its floor"),
    ),
    request_body = Telemetry,
    responses(
        (status = 200, description = "The device with its new telemetry", body = Device),
        (status = 400, description = "Unknown floor", body = ErrorBody),
        (status = 404, description = "Unknown device", body = ErrorBody),
    )
)]
pub async fn update_telemetry<S>(
    State(state): State<AppState<S>>,
    Path((floor_id, device_id)): Path<(String, String)>,
    Json(telemetry): Json<Telemetry>,
) -> Result<DeviceResponse, ApiError>
where
    S: BuildingStore + Send + Sync + 'static,
{
    let device = state
        .building_service
        .update_telemetry(&floor_id, &device_id, telemetry)
        .await?;
    Ok(DeviceResponse::Ok(Json(device)))
}
