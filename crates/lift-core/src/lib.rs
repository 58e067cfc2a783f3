//! `lift-core` — foundational types for the `rust_lift` elevator engine.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (`rand` and `thiserror`,
//! plus optional `serde`/`toml`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `FloorId`                               |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`config`]      | `BuildingConfig`, named presets, TOML loading         |
//! | [`rng`]         | `TrafficRng` (seeded call generation)                 |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//! | `toml`  | Adds `load_buildings_toml` / `parse_buildings_toml`.       |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, FloorId};
pub use rng::TrafficRng;
pub use time::{SimClock, SimTime};

#[cfg(feature = "toml")]
pub use config::{find_building, load_buildings_toml, parse_buildings_toml};
