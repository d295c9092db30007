//! # buildhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** over the building topology
//!   (`/building`, `/floors`, `/floor/{floor_id}/…`)
//! - Map HTTP requests (path segments, query strings, JSON bodies) into
//!   [`BuildingService`](buildhub_app::services::building_service::BuildingService)
//!   calls (driving adapter)
//! - Map results into JSON responses and domain errors into status codes
//!
//! ## Dependency rule
//! Depends on `buildhub-app` (for the store port and service) and
//! `buildhub-domain` (for types used in request/response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
