//! Building templates and the default-configuration factory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::building::{BuildingConfig, ColorScheme, Dimensions, RoofConfig};
use crate::enums::{RoofOrientation, RoofType};
use crate::error::ModelError;

/// Starting point for a new building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    IndustrialHall,
    Warehouse,
    Agricultural,
    Workshop,
    Hangar,
}

impl TemplateType {
    pub const ALL: [TemplateType; 5] = [
        TemplateType::IndustrialHall,
        TemplateType::Warehouse,
        TemplateType::Agricultural,
        TemplateType::Workshop,
        TemplateType::Hangar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::IndustrialHall => "industrial_hall",
            TemplateType::Warehouse => "warehouse",
            TemplateType::Agricultural => "agricultural",
            TemplateType::Workshop => "workshop",
            TemplateType::Hangar => "hangar",
        }
    }

    /// Template metadata and defaults.
    pub fn template(&self) -> &'static BuildingTemplate {
        BUILDING_TEMPLATES
            .iter()
            .find(|t| t.template_type == *self)
            .unwrap_or(&BUILDING_TEMPLATES[0])
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        TemplateType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown("template type", s))
    }
}

/// Static description of a building template.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingTemplate {
    pub template_type: TemplateType,
    pub name: &'static str,
    pub description: &'static str,
    /// Lower bound offered by the width input.
    pub min_width: f64,
    /// Upper bound offered by the width input.
    pub max_width: f64,
    pub width: f64,
    pub bays: u32,
    pub bay_spacing: f64,
    pub eave_height: f64,
    pub frame_type: &'static str,
    pub roof_type: RoofType,
    pub slope: &'static str,
}

impl BuildingTemplate {
    /// Bays pattern in `N*M` notation.
    pub fn bays_pattern(&self) -> String {
        format!("{}*{}", self.bays, self.bay_spacing)
    }

    /// Building length implied by the bays.
    pub fn length(&self) -> f64 {
        f64::from(self.bays) * self.bay_spacing
    }
}

pub static BUILDING_TEMPLATES: [BuildingTemplate; 5] = [
    BuildingTemplate {
        template_type: TemplateType::IndustrialHall,
        name: "Industrial Hall",
        description: "Clear-span production hall",
        min_width: 12.0,
        max_width: 60.0,
        width: 24.0,
        bays: 6,
        bay_spacing: 6.0,
        eave_height: 8.0,
        frame_type: "clear_span",
        roof_type: RoofType::Gable,
        slope: "1:10",
    },
    BuildingTemplate {
        template_type: TemplateType::Warehouse,
        name: "Warehouse",
        description: "Multi-span storage building",
        min_width: 12.0,
        max_width: 80.0,
        width: 30.0,
        bays: 8,
        bay_spacing: 6.0,
        eave_height: 10.0,
        frame_type: "multi_span",
        roof_type: RoofType::Gable,
        slope: "1:12",
    },
    BuildingTemplate {
        template_type: TemplateType::Agricultural,
        name: "Agricultural Building",
        description: "Barn or stable with a steep gable",
        min_width: 6.0,
        max_width: 40.0,
        width: 18.0,
        bays: 5,
        bay_spacing: 6.0,
        eave_height: 6.0,
        frame_type: "clear_span",
        roof_type: RoofType::Gable,
        slope: "1:5",
    },
    BuildingTemplate {
        template_type: TemplateType::Workshop,
        name: "Workshop",
        description: "Small mono-pitch workshop",
        min_width: 6.0,
        max_width: 30.0,
        width: 12.0,
        bays: 4,
        bay_spacing: 6.0,
        eave_height: 6.0,
        frame_type: "single_slope",
        roof_type: RoofType::SingleSlope,
        slope: "1:20",
    },
    BuildingTemplate {
        template_type: TemplateType::Hangar,
        name: "Hangar",
        description: "Wide clear-span hangar",
        min_width: 20.0,
        max_width: 100.0,
        width: 40.0,
        bays: 6,
        bay_spacing: 7.5,
        eave_height: 12.0,
        frame_type: "clear_span",
        roof_type: RoofType::Gable,
        slope: "1:10",
    },
];

/// Selectable frame type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameType {
    pub id: &'static str,
    pub name: &'static str,
}

pub static FRAME_TYPES: [FrameType; 4] = [
    FrameType {
        id: "clear_span",
        name: "Clear Span",
    },
    FrameType {
        id: "multi_span",
        name: "Multi-Span",
    },
    FrameType {
        id: "single_slope",
        name: "Single Slope",
    },
    FrameType {
        id: "lean_to",
        name: "Lean-To",
    },
];

/// Look up a frame type by identifier.
pub fn frame_type(id: &str) -> Option<&'static FrameType> {
    FRAME_TYPES.iter().find(|ft| ft.id == id)
}

pub static SLOPE_OPTIONS: [&str; 5] = ["1:5", "1:10", "1:12", "1:15", "1:20"];

fn default_colors() -> ColorScheme {
    ColorScheme {
        wall_panels: "RAL 9002".to_string(),
        roof_panels: "RAL 9006".to_string(),
        accessories: "RAL 9006".to_string(),
        flashing: "RAL 7016".to_string(),
        base_plate: "RAL 7016".to_string(),
        primary_structure: "RAL 7035".to_string(),
        secondary_structure: "RAL 7035".to_string(),
    }
}

/// Build the default configuration for a template.
pub fn create_default_building_config(template_type: TemplateType) -> BuildingConfig {
    let template = template_type.template();
    let orientation = template
        .roof_type
        .has_orientation()
        .then_some(RoofOrientation::default());
    BuildingConfig {
        template_type,
        dimensions: Dimensions {
            width: template.width,
            length: template.length(),
            bays_pattern: template.bays_pattern(),
            eave_height: template.eave_height,
        },
        frame_type: template.frame_type.to_string(),
        roof: RoofConfig {
            roof_type: template.roof_type,
            slope: template.slope.to_string(),
            orientation,
        },
        colors: default_colors(),
        crane: None,
        openings: Vec::new(),
        accessories: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_type_has_a_template() {
        for template_type in TemplateType::ALL {
            assert_eq!(template_type.template().template_type, template_type);
        }
    }

    #[test]
    fn bays_pattern_drops_trailing_zero() {
        let hall = TemplateType::IndustrialHall.template();
        assert_eq!(hall.bays_pattern(), "6*6");
        assert_eq!(TemplateType::Hangar.template().bays_pattern(), "6*7.5");
    }

    #[test]
    fn default_frame_types_are_known() {
        for template in &BUILDING_TEMPLATES {
            assert!(frame_type(template.frame_type).is_some(), "{}", template.name);
            assert!(SLOPE_OPTIONS.contains(&template.slope), "{}", template.name);
        }
    }
}
