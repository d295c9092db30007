//! # buildhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that owns the building:
//!   - `BuildingStore` — scoped shared/exclusive access to the [`Building`]
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `BuildingService` — read the topology, register, describe, update and
//!     delete devices
//! - Provide **in-process infrastructure** (the lock-guarded in-memory store)
//!   that doesn't need IO
//! - Orchestrate domain objects without knowing *how* requests arrive
//!
//! ## Dependency rule
//! Depends on `buildhub-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! [`Building`]: buildhub_domain::building::Building

pub mod building_store;
pub mod ports;
pub mod services;
