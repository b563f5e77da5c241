//! Typed partial updates.
//!
//! Each patch mirrors one sub-object of the configuration with every field
//! optional. Applying a patch is a shallow merge: fields that are `Some`
//! overwrite, fields that are `None` keep their current value.

use serde::{Deserialize, Serialize};

use crate::building::{ColorScheme, Dimensions, RoofConfig};
use crate::enums::{RoofOrientation, RoofType};
use crate::visualization::{VisualizationFlag, VisualizationSettings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bays_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eave_height: Option<f64>,
}

impl DimensionsPatch {
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn bays_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.bays_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn eave_height(mut self, height: f64) -> Self {
        self.eave_height = Some(height);
        self
    }

    pub fn apply_to(&self, target: &mut Dimensions) {
        if let Some(width) = self.width {
            target.width = width;
        }
        if let Some(length) = self.length {
            target.length = length;
        }
        if let Some(pattern) = &self.bays_pattern {
            target.bays_pattern.clone_from(pattern);
        }
        if let Some(height) = self.eave_height {
            target.eave_height = height;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<RoofType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<RoofOrientation>,
}

impl RoofPatch {
    #[must_use]
    pub fn roof_type(mut self, roof_type: RoofType) -> Self {
        self.roof_type = Some(roof_type);
        self
    }

    #[must_use]
    pub fn slope(mut self, slope: impl Into<String>) -> Self {
        self.slope = Some(slope.into());
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: RoofOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn apply_to(&self, target: &mut RoofConfig) {
        if let Some(roof_type) = self.roof_type {
            target.roof_type = roof_type;
        }
        if let Some(slope) = &self.slope {
            target.slope.clone_from(slope);
        }
        if let Some(orientation) = self.orientation {
            target.orientation = Some(orientation);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_panels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_panels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_structure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_structure: Option<String>,
}

impl ColorsPatch {
    /// Patch touching exactly one colour slot.
    pub fn slot(slot: ColorSlot, value: impl Into<String>) -> Self {
        let mut patch = Self::default();
        *patch.slot_mut(slot) = Some(value.into());
        patch
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<String> {
        match slot {
            ColorSlot::WallPanels => &mut self.wall_panels,
            ColorSlot::RoofPanels => &mut self.roof_panels,
            ColorSlot::Accessories => &mut self.accessories,
            ColorSlot::Flashing => &mut self.flashing,
            ColorSlot::BasePlate => &mut self.base_plate,
            ColorSlot::PrimaryStructure => &mut self.primary_structure,
            ColorSlot::SecondaryStructure => &mut self.secondary_structure,
        }
    }

    pub fn apply_to(&self, target: &mut ColorScheme) {
        for slot in ColorSlot::ALL {
            if let Some(value) = self.get(slot) {
                target.get_mut(slot).clone_from(value);
            }
        }
    }

    fn get(&self, slot: ColorSlot) -> Option<&String> {
        match slot {
            ColorSlot::WallPanels => self.wall_panels.as_ref(),
            ColorSlot::RoofPanels => self.roof_panels.as_ref(),
            ColorSlot::Accessories => self.accessories.as_ref(),
            ColorSlot::Flashing => self.flashing.as_ref(),
            ColorSlot::BasePlate => self.base_plate.as_ref(),
            ColorSlot::PrimaryStructure => self.primary_structure.as_ref(),
            ColorSlot::SecondaryStructure => self.secondary_structure.as_ref(),
        }
    }
}

/// Names one colour field of [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    WallPanels,
    RoofPanels,
    Accessories,
    Flashing,
    BasePlate,
    PrimaryStructure,
    SecondaryStructure,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 7] = [
        ColorSlot::WallPanels,
        ColorSlot::RoofPanels,
        ColorSlot::Accessories,
        ColorSlot::Flashing,
        ColorSlot::BasePlate,
        ColorSlot::PrimaryStructure,
        ColorSlot::SecondaryStructure,
    ];

    /// Label shown above the picker.
    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::WallPanels => "Wall Panel Color",
            ColorSlot::RoofPanels => "Roof Panel Color",
            ColorSlot::Accessories => "Accessory Color",
            ColorSlot::Flashing => "Flashing Color",
            ColorSlot::BasePlate => "Base Plate",
            ColorSlot::PrimaryStructure => "Primary Structure",
            ColorSlot::SecondaryStructure => "Secondary Structure",
        }
    }
}

impl ColorScheme {
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::WallPanels => &self.wall_panels,
            ColorSlot::RoofPanels => &self.roof_panels,
            ColorSlot::Accessories => &self.accessories,
            ColorSlot::Flashing => &self.flashing,
            ColorSlot::BasePlate => &self.base_plate,
            ColorSlot::PrimaryStructure => &self.primary_structure,
            ColorSlot::SecondaryStructure => &self.secondary_structure,
        }
    }

    fn get_mut(&mut self, slot: ColorSlot) -> &mut String {
        match slot {
            ColorSlot::WallPanels => &mut self.wall_panels,
            ColorSlot::RoofPanels => &mut self.roof_panels,
            ColorSlot::Accessories => &mut self.accessories,
            ColorSlot::Flashing => &mut self.flashing,
            ColorSlot::BasePlate => &mut self.base_plate,
            ColorSlot::PrimaryStructure => &mut self.primary_structure,
            ColorSlot::SecondaryStructure => &mut self.secondary_structure,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_edges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_faces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_panels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_solid_walls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_openings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_frames: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_purlins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_girts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_flashing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_accessories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_base_plate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_dimensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_buttons: Option<bool>,
}

impl VisualizationPatch {
    /// Patch toggling exactly one flag.
    pub fn flag(flag: VisualizationFlag, value: bool) -> Self {
        let mut patch = Self::default();
        *patch.slot_mut(flag) = Some(value);
        patch
    }

    pub fn get(&self, flag: VisualizationFlag) -> Option<bool> {
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

    fn slot_mut(&mut self, flag: VisualizationFlag) -> &mut Option<bool> {
        match flag {
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
        }
    }

    pub fn apply_to(&self, target: &mut VisualizationSettings) {
        for flag in VisualizationFlag::ALL {
            if let Some(value) = self.get(flag) {
                target.set(flag, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimensions() -> Dimensions {
        Dimensions {
            width: 12.0,
            length: 24.0,
            bays_pattern: "4*6".to_string(),
            eave_height: 6.0,
        }
    }

    #[test]
    fn dimensions_patch_overwrites_only_given_fields() {
        let mut dims = dimensions();
        DimensionsPatch::default().width(18.5).apply_to(&mut dims);
        assert_eq!(dims.width, 18.5);
        assert_eq!(dims.length, 24.0);
        assert_eq!(dims.bays_pattern, "4*6");
        assert_eq!(dims.eave_height, 6.0);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut dims = dimensions();
        DimensionsPatch::default().apply_to(&mut dims);
        assert_eq!(dims, dimensions());
    }

    #[test]
    fn roof_patch_sets_orientation_but_never_clears_it() {
        let mut roof = RoofConfig {
            roof_type: RoofType::SingleSlope,
            slope: "1:20".to_string(),
            orientation: Some(RoofOrientation::Right),
        };
        RoofPatch::default().roof_type(RoofType::Gable).apply_to(&mut roof);
        assert_eq!(roof.roof_type, RoofType::Gable);
        assert_eq!(roof.orientation, Some(RoofOrientation::Right));
    }

    #[test]
    fn color_slot_patch_touches_one_field() {
        let patch = ColorsPatch::slot(ColorSlot::Flashing, "RAL 3000");
        assert_eq!(patch.flashing.as_deref(), Some("RAL 3000"));
        assert!(patch.wall_panels.is_none());
    }

    #[test]
    fn patch_deserializes_partial_json() {
        let patch: DimensionsPatch =
            serde_json::from_str(r#"{"eave_height": 7.5}"#).expect("deserialize patch");
        assert_eq!(patch, DimensionsPatch::default().eave_height(7.5));
    }
}
