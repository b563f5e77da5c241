//! Type-safe enumerations for building configuration.
//!
//! These enums replace the free-form identifier strings the configurator
//! panels exchange. Each one parses from its wire identifier (trimmed,
//! case-insensitive) and formats back to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Roof shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    /// Symmetric two-sided roof with a central ridge.
    #[default]
    Gable,
    /// Mono-pitch roof falling to one side.
    SingleSlope,
    /// Several gables side by side (multi-span halls).
    MultiGable,
}

impl RoofType {
    pub const ALL: [RoofType; 3] = [RoofType::Gable, RoofType::SingleSlope, RoofType::MultiGable];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoofType::Gable => "gable",
            RoofType::SingleSlope => "single_slope",
            RoofType::MultiGable => "multi_gable",
        }
    }

    /// Returns the human-readable label used in selects.
    pub fn label(&self) -> &'static str {
        match self {
            RoofType::Gable => "Gable",
            RoofType::SingleSlope => "Single slope",
            RoofType::MultiGable => "Multi gable",
        }
    }

    /// Only single-slope roofs have a meaningful orientation.
    pub fn has_orientation(&self) -> bool {
        matches!(self, RoofType::SingleSlope)
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoofType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gable" => Ok(RoofType::Gable),
            "single_slope" | "single slope" => Ok(RoofType::SingleSlope),
            "multi_gable" | "multi gable" => Ok(RoofType::MultiGable),
            _ => Err(ModelError::unknown("roof type", s)),
        }
    }
}

/// Side towards which a single-slope roof falls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofOrientation {
    Left,
    #[default]
    Right,
}

impl RoofOrientation {
    pub const ALL: [RoofOrientation; 2] = [RoofOrientation::Left, RoofOrientation::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoofOrientation::Left => "left",
            RoofOrientation::Right => "right",
        }
    }
}

impl fmt::Display for RoofOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoofOrientation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(RoofOrientation::Left),
            "right" => Ok(RoofOrientation::Right),
            _ => Err(ModelError::unknown("roof orientation", s)),
        }
    }
}

/// Kind of wall penetration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Door,
    Window,
    RollDoor,
    SlidingDoor,
    Louver,
}

impl OpeningType {
    pub const ALL: [OpeningType; 5] = [
        OpeningType::Door,
        OpeningType::Window,
        OpeningType::RollDoor,
        OpeningType::SlidingDoor,
        OpeningType::Louver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpeningType::Door => "door",
            OpeningType::Window => "window",
            OpeningType::RollDoor => "roll_door",
            OpeningType::SlidingDoor => "sliding_door",
            OpeningType::Louver => "louver",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpeningType::Door => "Door",
            OpeningType::Window => "Window",
            OpeningType::RollDoor => "Roll door",
            OpeningType::SlidingDoor => "Sliding door",
            OpeningType::Louver => "Louver",
        }
    }
}

impl fmt::Display for OpeningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OpeningType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "_");
        OpeningType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown("opening type", s))
    }
}

/// Building wall an opening or accessory is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    Front,
    Back,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Front, Wall::Back, Wall::Left, Wall::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::Front => "front",
            Wall::Back => "back",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Wall {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Wall::Front),
            "back" => Ok(Wall::Back),
            "left" => Ok(Wall::Left),
            "right" => Ok(Wall::Right),
            _ => Err(ModelError::unknown("wall", s)),
        }
    }
}

/// Add-on component attached to the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    Gutter,
    Downspout,
    Skylight,
    RidgeVent,
    Canopy,
}

impl AccessoryKind {
    pub const ALL: [AccessoryKind; 5] = [
        AccessoryKind::Gutter,
        AccessoryKind::Downspout,
        AccessoryKind::Skylight,
        AccessoryKind::RidgeVent,
        AccessoryKind::Canopy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryKind::Gutter => "gutter",
            AccessoryKind::Downspout => "downspout",
            AccessoryKind::Skylight => "skylight",
            AccessoryKind::RidgeVent => "ridge_vent",
            AccessoryKind::Canopy => "canopy",
        }
    }
}

impl fmt::Display for AccessoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessoryKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "_");
        AccessoryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown("accessory kind", s))
    }
}

/// Camera preset of the 3D viewport.
///
/// The wire identifiers are the axis names shown on the control bar
/// (`3D`, `+Y`, `-Y`, `+X`, `-X`, `-Z`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Free 3D perspective.
    #[default]
    #[serde(rename = "3D")]
    Perspective,
    #[serde(rename = "+Y")]
    Top,
    #[serde(rename = "-Y")]
    Bottom,
    #[serde(rename = "+X")]
    Right,
    #[serde(rename = "-X")]
    Left,
    #[serde(rename = "-Z")]
    Front,
}

impl ViewMode {
    /// All view modes in control bar order.
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Perspective,
        ViewMode::Top,
        ViewMode::Bottom,
        ViewMode::Right,
        ViewMode::Left,
        ViewMode::Front,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Perspective => "3D",
            ViewMode::Top => "+Y",
            ViewMode::Bottom => "-Y",
            ViewMode::Right => "+X",
            ViewMode::Left => "-X",
            ViewMode::Front => "-Z",
        }
    }

    /// Tooltip label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Perspective => "3D Perspective",
            ViewMode::Top => "Top View",
            ViewMode::Bottom => "Bottom View",
            ViewMode::Right => "Right Side",
            ViewMode::Left => "Left Side",
            ViewMode::Front => "Front View",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown("view mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_type_round_trips_identifier() {
        for roof in RoofType::ALL {
            assert_eq!(roof.as_str().parse::<RoofType>().unwrap(), roof);
        }
        assert_eq!(" Single Slope ".parse::<RoofType>().unwrap(), RoofType::SingleSlope);
    }

    #[test]
    fn view_mode_parses_axis_names() {
        assert_eq!("3d".parse::<ViewMode>().unwrap(), ViewMode::Perspective);
        assert_eq!("-z".parse::<ViewMode>().unwrap(), ViewMode::Front);
        assert!("Z".parse::<ViewMode>().is_err());
    }

    #[test]
    fn unknown_opening_type_reports_value() {
        let err = "garage".parse::<OpeningType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown opening type: garage");
    }
}
