//! Per-building configuration.
//!
//! The engine is parameterized entirely by a [`BuildingConfig`]; it never
//! reads global settings.  Three named presets are built in, and the `toml`
//! feature adds loading of further presets from a file:
//!
//! ```toml
//! [[building]]
//! name          = "tower"
//! num_floors    = 40
//! num_elevators = 6
//! dwell_ms      = 3000   # optional, default 2000
//! ```

use crate::{CoreError, CoreResult, FloorId};

#[cfg(feature = "toml")]
use std::path::Path;

/// Default travel time per floor.
pub const DEFAULT_TRAVEL_MS_PER_FLOOR: u64 = 500;

/// Default door dwell time at a served floor.
pub const DEFAULT_DWELL_MS: u64 = 2_000;

/// `(name, num_floors, num_elevators)` for the built-in presets.
const PRESETS: [(&str, u32, u32); 3] = [
    ("building1", 15, 3),
    ("building2", 5, 1),
    ("building3", 10, 2),
];

/// Building layout and timing constants consumed by the dispatch engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Preset name.  Informational only; the engine never looks it up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    pub num_floors: u32,

    pub num_elevators: u32,

    /// Milliseconds a cab needs to cross one floor.
    #[cfg_attr(feature = "serde", serde(default = "default_travel_ms_per_floor"))]
    pub travel_ms_per_floor: u64,

    /// Milliseconds the doors stay open at a served floor.
    #[cfg_attr(feature = "serde", serde(default = "default_dwell_ms"))]
    pub dwell_ms: u64,

    /// Emit per-second `CountdownTick` events for every assigned call.
    #[cfg_attr(feature = "serde", serde(default))]
    pub countdown: bool,
}

#[cfg(feature = "serde")]
fn default_travel_ms_per_floor() -> u64 {
    DEFAULT_TRAVEL_MS_PER_FLOOR
}

#[cfg(feature = "serde")]
fn default_dwell_ms() -> u64 {
    DEFAULT_DWELL_MS
}

impl BuildingConfig {
    /// An unnamed building with the default timing constants.
    pub fn new(num_floors: u32, num_elevators: u32) -> Self {
        Self {
            name: String::new(),
            num_floors,
            num_elevators,
            travel_ms_per_floor: DEFAULT_TRAVEL_MS_PER_FLOOR,
            dwell_ms: DEFAULT_DWELL_MS,
            countdown: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_timing(mut self, travel_ms_per_floor: u64, dwell_ms: u64) -> Self {
        self.travel_ms_per_floor = travel_ms_per_floor;
        self.dwell_ms = dwell_ms;
        self
    }

    pub fn with_countdown(mut self, enabled: bool) -> Self {
        self.countdown = enabled;
        self
    }

    /// All built-in presets, in declaration order.
    pub fn presets() -> Vec<BuildingConfig> {
        PRESETS
            .iter()
            .map(|&(name, floors, elevators)| BuildingConfig::new(floors, elevators).with_name(name))
            .collect()
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> CoreResult<BuildingConfig> {
        Self::presets()
            .into_iter()
            .find(|b| b.name == name)
            .ok_or_else(|| CoreError::UnknownBuilding(name.to_owned()))
    }

    /// Reject layouts the engine cannot serve.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_floors == 0 {
            return Err(CoreError::Config("building must have at least one floor".into()));
        }
        if self.num_elevators == 0 {
            return Err(CoreError::Config("building must have at least one elevator".into()));
        }
        Ok(())
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn contains(&self, floor: FloorId) -> bool {
        floor.0 < self.num_floors
    }

    /// Travel time across `gap` floors.
    #[inline]
    pub fn travel_ms(&self, gap: u32) -> u64 {
        gap as u64 * self.travel_ms_per_floor
    }
}

// ── TOML loading ──────────────────────────────────────────────────────────────

#[cfg(feature = "toml")]
#[derive(serde::Deserialize)]
struct BuildingsFile {
    #[serde(rename = "building", default)]
    buildings: Vec<BuildingConfig>,
}

/// Parse every `[[building]]` table in `text`.
#[cfg(feature = "toml")]
pub fn parse_buildings_toml(text: &str) -> CoreResult<Vec<BuildingConfig>> {
    let file: BuildingsFile = toml::from_str(text).map_err(|e| CoreError::Parse(e.to_string()))?;
    for b in &file.buildings {
        b.validate()?;
    }
    Ok(file.buildings)
}

/// Like [`parse_buildings_toml`] but reads from `path`.
#[cfg(feature = "toml")]
pub fn load_buildings_toml(path: &Path) -> CoreResult<Vec<BuildingConfig>> {
    let text = std::fs::read_to_string(path)?;
    parse_buildings_toml(&text)
}

/// Find `name` in `buildings`, falling back to the built-in presets.
#[cfg(feature = "toml")]
pub fn find_building(buildings: &[BuildingConfig], name: &str) -> CoreResult<BuildingConfig> {
    match buildings.iter().find(|b| b.name == name) {
        Some(b) => Ok(b.clone()),
        None => BuildingConfig::preset(name),
    }
}
