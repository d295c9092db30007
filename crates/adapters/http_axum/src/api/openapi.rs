//! OpenAPI description of the JSON API, served at `/openapi.json`.

use utoipa::OpenApi;

use buildhub_domain::building::Building;
use buildhub_domain::device::{Device, DeviceType};
use buildhub_domain::floor::Floor;
use buildhub_domain::id::{DeviceId, FloorId};
use buildhub_domain::telemetry::Telemetry;

use super::building::{self, MessageResponse};
use super::{devices, floors};
use crate::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Building IoT Management System",
        description = "Floors, devices and device telemetry of a single building.",
    ),
    paths(
        building::root,
        building::get,
        floors::list,
        floors::get,
        floors::devices,
        devices::get,
        devices::create,
        devices::delete,
        devices::update_description,
        devices::update_telemetry,
    ),
    components(schemas(
        Building,
        Floor,
        FloorId,
        Device,
        DeviceId,
        DeviceType,
        Telemetry,
        MessageResponse,
        ErrorBody,
    )),
    tags(
        (name = "building", description = "Greeting and whole-building snapshot"),
        (name = "floors", description = "Floors created at start-up"),
        (name = "devices", description = "Device registry and telemetry of a floor"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/",
            "/building",
            "/floors",
            "/floor/{floor_id}",
            "/floor/{floor_id}/devices",
            "/floor/{floor_id}/device",
            "/floor/{floor_id}/device/{device_id}",
            "/floor/{floor_id}/telemetry/{device_id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }

        let device_ops = &paths["/floor/{floor_id}/device/{device_id}"];
        assert!(device_ops.get("get").is_some());
        assert!(device_ops.get("post").is_some());
        assert!(device_ops.get("delete").is_some());
    }

    #[test]
    fn should_expose_device_schema_with_type_field() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let device = &doc["components"]["schemas"]["Device"]["properties"];
        assert!(device.get("type").is_some());
        assert!(device.get("kind").is_none());

        let kinds = &doc["components"]["schemas"]["DeviceType"]["enum"];
        assert_eq!(
            kinds,
            &serde_json::json!(["presence_sensor", "light_actuator"])
        );
    }
}
