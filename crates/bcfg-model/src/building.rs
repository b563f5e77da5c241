//! The building configuration aggregate.
//!
//! A [`BuildingConfig`] is treated as an immutable value: the store replaces it
//! wholesale on every change and keeps earlier values as history snapshots.

use serde::{Deserialize, Serialize};

use crate::enums::{AccessoryKind, OpeningType, RoofOrientation, RoofType, Wall};
use crate::template::TemplateType;

/// Full description of one configured building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingConfig {
    /// Template the configuration was created from.
    pub template_type: TemplateType,
    pub dimensions: Dimensions,
    /// Frame type identifier (see [`crate::FRAME_TYPES`]).
    pub frame_type: String,
    pub roof: RoofConfig,
    pub colors: ColorScheme,
    /// Overhead crane. `None` means no crane, never a zero capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crane: Option<Crane>,
    #[serde(default)]
    pub openings: Vec<Opening>,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

impl BuildingConfig {
    /// Number of openings carrying the given identifier.
    pub fn opening_count(&self, id: &str) -> usize {
        self.openings.iter().filter(|o| o.id == id).count()
    }

    /// Number of accessories carrying the given identifier.
    pub fn accessory_count(&self, id: &str) -> usize {
        self.accessories.iter().filter(|a| a.id == id).count()
    }
}

/// Main building dimensions, in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    /// Bays along the length as `N*M` (N bays of M metres).
    pub bays_pattern: String,
    pub eave_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofConfig {
    #[serde(rename = "type")]
    pub roof_type: RoofType,
    /// Slope as offered by [`crate::SLOPE_OPTIONS`], e.g. `1:10`.
    pub slope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<RoofOrientation>,
}

/// Colour assignment per building part. Values are RAL codes or names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall_panels: String,
    pub roof_panels: String,
    pub accessories: String,
    pub flashing: String,
    pub base_plate: String,
    pub primary_structure: String,
    pub secondary_structure: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crane {
    /// Lifting capacity in tonnes.
    pub capacity: f64,
}

/// A wall penetration (door, window, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub id: String,
    #[serde(rename = "type")]
    pub opening_type: OpeningType,
    pub wall: Wall,
}

impl Opening {
    pub fn new(id: impl Into<String>, opening_type: OpeningType, wall: Wall) -> Self {
        Self {
            id: id.into(),
            opening_type,
            wall,
        }
    }
}

/// An add-on building component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: String,
    pub kind: AccessoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall: Option<Wall>,
}

impl Accessory {
    pub fn new(id: impl Into<String>, kind: AccessoryKind) -> Self {
        Self {
            id: id.into(),
            kind,
            wall: None,
        }
    }

    #[must_use]
    pub fn on_wall(mut self, wall: Wall) -> Self {
        self.wall = Some(wall);
        self
    }
}
