//! # buildhub-domain
//!
//! Pure domain model for the buildhub building IoT registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error taxonomy
//! - Define **Devices** (sensors and actuators with a telemetry payload)
//! - Define **Floors** (ordered device registries with per-floor id uniqueness)
//! - Define the **Building** (the ordered set of floors fixed at start-up)
//! - Contain all invariant enforcement and lookup logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Locking and sharing of the building live in the `app` crate.

pub mod error;
pub mod id;

pub mod building;
pub mod device;
pub mod floor;
pub mod telemetry;
