//! JSON handlers for the service greeting and the building snapshot.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use buildhub_app::ports::BuildingStore;
use buildhub_domain::building::Building;

use crate::state::AppState;

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Building IoT Management System";

/// `{"message": …}` body shared by the greeting and confirmation responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Device sensor1 deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Building>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "building",
    responses((status = 200, description = "Service greeting", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(GREETING))
}

/// `GET /building`
#[utoipa::path(
    get,
    path = "/building",
    tag = "building",
    responses((status = 200, description = "The whole building", body = Building))
)]
pub async fn get<S>(State(state): State<AppState<S>>) -> GetResponse
where
    S: BuildingStore + Send + Sync + 'static,
{
    let building = state.building_service.get_building().await;
    GetResponse::Ok(Json(building))
}
