//! Viewport display toggles.
//!
//! These flags only tell the external 3D viewport what to draw. They are not
//! part of the building configuration and are never versioned in history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationSettings {
    pub show_edges: bool,
    pub show_faces: bool,
    pub show_panels: bool,
    pub show_solid_walls: bool,
    pub show_openings: bool,
    pub show_frames: bool,
    pub show_purlins: bool,
    pub show_girts: bool,
    pub show_flashing: bool,
    pub show_accessories: bool,
    pub show_base_plate: bool,
    pub show_dimensions: bool,
    pub show_buttons: bool,
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            show_edges: true,
            show_faces: true,
            show_panels: true,
            show_solid_walls: true,
            show_openings: true,
            show_frames: true,
            show_purlins: false,
            show_girts: false,
            show_flashing: true,
            show_accessories: true,
            show_base_plate: true,
            show_dimensions: true,
            show_buttons: true,
        }
    }
}

impl VisualizationSettings {
    pub fn get(&self, flag: VisualizationFlag) -> bool {
        match flag {
            VisualizationFlag::Edges => self.show_edges,
            VisualizationFlag::Faces => self.show_faces,
            VisualizationFlag::Panels => self.show_panels,
            VisualizationFlag::SolidWalls => self.show_solid_walls,
            VisualizationFlag::Openings => self.show_openings,
            VisualizationFlag::Frames => self.show_frames,
            VisualizationFlag::Purlins => self.show_purlins,
            VisualizationFlag::Girts => self.show_girts,
            VisualizationFlag::Flashing => self.show_flashing,
            VisualizationFlag::Accessories => self.show_accessories,
            VisualizationFlag::BasePlate => self.show_base_plate,
            VisualizationFlag::Dimensions => self.show_dimensions,
            VisualizationFlag::Buttons => self.show_buttons,
        }
    }

    pub fn set(&mut self, flag: VisualizationFlag, value: bool) {
        let slot = match flag {
            VisualizationFlag::Edges => &mut self.show_edges,
            VisualizationFlag::Faces => &mut self.show_faces,
            VisualizationFlag::Panels => &mut self.show_panels,
            VisualizationFlag::SolidWalls => &mut self.show_solid_walls,
            VisualizationFlag::Openings => &mut self.show_openings,
            VisualizationFlag::Frames => &mut self.show_frames,
            VisualizationFlag::Purlins => &mut self.show_purlins,
            VisualizationFlag::Girts => &mut self.show_girts,
            VisualizationFlag::Flashing => &mut self.show_flashing,
            VisualizationFlag::Accessories => &mut self.show_accessories,
            VisualizationFlag::BasePlate => &mut self.show_base_plate,
            VisualizationFlag::Dimensions => &mut self.show_dimensions,
            VisualizationFlag::Buttons => &mut self.show_buttons,
        };
        *slot = value;
    }

    /// Number of flags currently switched on.
    pub fn visible_count(&self) -> usize {
        VisualizationFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
            .count()
    }
}

/// Names a single visualization flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationFlag {
    Edges,
    Faces,
    Panels,
    SolidWalls,
    Openings,
    Frames,
    Purlins,
    Girts,
    Flashing,
    Accessories,
    BasePlate,
    Dimensions,
    Buttons,
}

impl VisualizationFlag {
    pub const ALL: [VisualizationFlag; 13] = [
        VisualizationFlag::Edges,
        VisualizationFlag::Faces,
        VisualizationFlag::Panels,
        VisualizationFlag::SolidWalls,
        VisualizationFlag::Openings,
        VisualizationFlag::Frames,
        VisualizationFlag::Purlins,
        VisualizationFlag::Girts,
        VisualizationFlag::Flashing,
        VisualizationFlag::Accessories,
        VisualizationFlag::BasePlate,
        VisualizationFlag::Dimensions,
        VisualizationFlag::Buttons,
    ];

    /// Field key in [`VisualizationSettings`].
    pub fn key(&self) -> &'static str {
        match self {
            VisualizationFlag::Edges => "show_edges",
            VisualizationFlag::Faces => "show_faces",
            VisualizationFlag::Panels => "show_panels",
            VisualizationFlag::SolidWalls => "show_solid_walls",
            VisualizationFlag::Openings => "show_openings",
            VisualizationFlag::Frames => "show_frames",
            VisualizationFlag::Purlins => "show_purlins",
            VisualizationFlag::Girts => "show_girts",
            VisualizationFlag::Flashing => "show_flashing",
            VisualizationFlag::Accessories => "show_accessories",
            VisualizationFlag::BasePlate => "show_base_plate",
            VisualizationFlag::Dimensions => "show_dimensions",
            VisualizationFlag::Buttons => "show_buttons",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisualizationFlag::Edges => "Edges",
            VisualizationFlag::Faces => "Faces",
            VisualizationFlag::Panels => "Panels",
            VisualizationFlag::SolidWalls => "Solid Walls",
            VisualizationFlag::Openings => "Openings",
            VisualizationFlag::Frames => "Frames",
            VisualizationFlag::Purlins => "Purlins",
            VisualizationFlag::Girts => "Girts",
            VisualizationFlag::Flashing => "Flashing",
            VisualizationFlag::Accessories => "Accessories",
            VisualizationFlag::BasePlate => "Base Plate",
            VisualizationFlag::Dimensions => "Dimensions",
            VisualizationFlag::Buttons => "Buttons",
        }
    }
}

impl fmt::Display for VisualizationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VisualizationFlag {
    type Err = ModelError;

    /// Accepts the field key (`show_base_plate`) or the bare name (`base_plate`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "_");
        let bare = normalized.strip_prefix("show_").unwrap_or(&normalized);
        VisualizationFlag::ALL
            .into_iter()
            .find(|flag| flag.key().strip_prefix("show_") == Some(bare))
            .ok_or_else(|| ModelError::unknown("visualization flag", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purlins_and_girts_start_hidden() {
        let settings = VisualizationSettings::default();
        assert!(!settings.show_purlins);
        assert!(!settings.show_girts);
        assert_eq!(settings.visible_count(), 11);
    }

    #[test]
    fn set_and_get_agree() {
        let mut settings = VisualizationSettings::default();
        for flag in VisualizationFlag::ALL {
            settings.set(flag, false);
            assert!(!settings.get(flag), "{flag}");
        }
        assert_eq!(settings.visible_count(), 0);
    }

    #[test]
    fn flag_parses_key_or_bare_name() {
        assert_eq!(
            "show_base_plate".parse::<VisualizationFlag>().unwrap(),
            VisualizationFlag::BasePlate
        );
        assert_eq!(
            "Solid Walls".parse::<VisualizationFlag>().unwrap(),
            VisualizationFlag::SolidWalls
        );
    }
}
