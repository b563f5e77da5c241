//! Left navigation accordion.
//!
//! Seven sections in fixed order. The whole navigation is absent while no
//! building is configured.

use serde::Serialize;

use bcfg_model::{
    BUILDING_APPLICATIONS, BUILDING_SECTORS, BuildingConfig, ColorSlot, FRAME_TYPES, OpeningType,
    REALIZATION_YEARS, ReferralSource, RoofOrientation, RoofType, SLOPE_OPTIONS, Wall,
};
use bcfg_store::ConfiguratorState;

use super::SelectOption;
use super::color_picker::{ColorPickerView, color_picker_view};
use crate::input::{EAVE_HEIGHT_MAX, EAVE_HEIGHT_MIN, NumericBounds, WIDTH_MAX, WIDTH_MIN};
use crate::state::{PanelId, QuoteDraft, UiState};

const DEFAULT_BAY_COUNT: &str = "4";
const DEFAULT_BAY_SPACING: &str = "6";

/// Display-only pickers in the openings section: (label, value).
const OPENING_COLOR_PREVIEWS: [(&str, &str); 3] = [
    ("Window Color", "Arctic White"),
    ("Door Fill Color", "Arctic White"),
    ("Roll Door Color", "RAL 9006"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeftNavigationView {
    /// Expanded section; `None` when the accordion is collapsed.
    pub active: Option<PanelId>,
    pub sections: Vec<SectionHeader>,
    pub building: BuildingSection,
    pub bays: BaysSection,
    pub sheeting: SheetingSection,
    pub openings: OpeningsSection,
    pub accessory: AccessorySection,
    pub structure: StructureSection,
    pub quote: QuoteSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub id: PanelId,
    pub label: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingSection {
    pub width: f64,
    pub width_bounds: NumericBounds,
    pub frame_type: String,
    pub frame_types: Vec<SelectOption>,
    pub bays_pattern: String,
    pub eave_height: f64,
    pub eave_bounds: NumericBounds,
    pub roof_type: RoofType,
    pub roof_types: Vec<SelectOption>,
    /// Present only for roofs that have an orientation.
    pub orientation: Option<RoofOrientation>,
    pub slope: String,
    pub slopes: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaysSection {
    pub bay_count: String,
    pub bay_spacing: String,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetingSection {
    pub wall_panels: ColorPickerView,
    pub roof_panels: ColorPickerView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningsSection {
    pub color_previews: Vec<ColorPickerView>,
    pub available_types: Vec<SelectOption>,
    pub openings: Vec<OpeningRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningRow {
    pub id: String,
    pub type_label: &'static str,
    pub wall: Wall,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessorySection {
    pub accessories: ColorPickerView,
    pub flashing: ColorPickerView,
    /// Zero when no crane is configured.
    pub crane_capacity: f64,
    pub crane_bounds: NumericBounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSection {
    pub base_plate: ColorPickerView,
    pub primary_structure: ColorPickerView,
    pub secondary_structure: ColorPickerView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSection {
    pub draft: QuoteDraft,
    pub sectors: Vec<&'static str>,
    pub applications: Vec<&'static str>,
    pub realization_years: Vec<u16>,
    pub referral_options: Vec<SelectOption>,
}

pub fn left_navigation_view(state: &ConfiguratorState, ui: &UiState) -> Option<LeftNavigationView> {
    let config = state.building_config()?;
    let active = PanelId::from_id(state.active_panel());

    let sections = PanelId::ALL
        .into_iter()
        .map(|id| SectionHeader {
            id,
            label: id.label(),
            expanded: active == Some(id),
        })
        .collect();

    let picker = |slot: ColorSlot| {
        color_picker_view(
            slot.label(),
            Some(slot),
            config.colors.get(slot),
            ui.open_picker == Some(slot),
        )
    };

    Some(LeftNavigationView {
        active,
        sections,
        building: building_section(config),
        bays: bays_section(config),
        sheeting: SheetingSection {
            wall_panels: picker(ColorSlot::WallPanels),
            roof_panels: picker(ColorSlot::RoofPanels),
        },
        openings: openings_section(config),
        accessory: AccessorySection {
            accessories: picker(ColorSlot::Accessories),
            flashing: picker(ColorSlot::Flashing),
            crane_capacity: config.crane.map_or(0.0, |crane| crane.capacity),
            crane_bounds: NumericBounds::at_least(0.0),
        },
        structure: StructureSection {
            base_plate: picker(ColorSlot::BasePlate),
            primary_structure: picker(ColorSlot::PrimaryStructure),
            secondary_structure: picker(ColorSlot::SecondaryStructure),
        },
        quote: quote_section(&ui.quote),
    })
}

fn building_section(config: &BuildingConfig) -> BuildingSection {
    let template = config.template_type.template();
    let min_width = positive_or(template.min_width, WIDTH_MIN);
    let max_width = positive_or(template.max_width, WIDTH_MAX);

    let orientation = config
        .roof
        .roof_type
        .has_orientation()
        .then(|| config.roof.orientation.unwrap_or(RoofOrientation::Right));

    BuildingSection {
        width: config.dimensions.width,
        width_bounds: NumericBounds::new(min_width, max_width),
        frame_type: config.frame_type.clone(),
        frame_types: FRAME_TYPES
            .iter()
            .map(|ft| SelectOption::new(ft.id, ft.name))
            .collect(),
        bays_pattern: config.dimensions.bays_pattern.clone(),
        eave_height: config.dimensions.eave_height,
        eave_bounds: NumericBounds::new(EAVE_HEIGHT_MIN, EAVE_HEIGHT_MAX),
        roof_type: config.roof.roof_type,
        roof_types: RoofType::ALL
            .into_iter()
            .map(|rt| SelectOption::new(rt.as_str(), rt.label()))
            .collect(),
        orientation,
        slope: config.roof.slope.clone(),
        slopes: SLOPE_OPTIONS.to_vec(),
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 { value } else { fallback }
}

/// Bay count and spacing from an `N*M` pattern.
///
/// Text before the first `*` is the count and text after it the spacing.
/// Missing or empty parts read as `4` and `6`.
pub fn bays_summary(pattern: &str) -> (&str, &str) {
    let mut parts = pattern.split('*');
    let count = parts
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BAY_COUNT);
    let spacing = parts
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BAY_SPACING);
    (count, spacing)
}

fn bays_section(config: &BuildingConfig) -> BaysSection {
    let (count, spacing) = bays_summary(&config.dimensions.bays_pattern);
    BaysSection {
        bay_count: count.to_string(),
        bay_spacing: spacing.to_string(),
        length: config.dimensions.length,
    }
}

fn openings_section(config: &BuildingConfig) -> OpeningsSection {
    OpeningsSection {
        color_previews: OPENING_COLOR_PREVIEWS
            .iter()
            .map(|&(label, value)| color_picker_view(label, None, value, false))
            .collect(),
        available_types: OpeningType::ALL
            .into_iter()
            .map(|ot| SelectOption::new(ot.as_str(), ot.label()))
            .collect(),
        openings: config
            .openings
            .iter()
            .map(|opening| OpeningRow {
                id: opening.id.clone(),
                type_label: opening.opening_type.label(),
                wall: opening.wall,
            })
            .collect(),
    }
}

fn quote_section(draft: &QuoteDraft) -> QuoteSection {
    QuoteSection {
        draft: draft.clone(),
        sectors: BUILDING_SECTORS.to_vec(),
        applications: BUILDING_APPLICATIONS.to_vec(),
        realization_years: REALIZATION_YEARS.to_vec(),
        referral_options: ReferralSource::ALL
            .into_iter()
            .map(|source| SelectOption::new(source.as_str(), source.label()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bays_summary_splits_on_star() {
        assert_eq!(bays_summary("8*7.5"), ("8", "7.5"));
        assert_eq!(bays_summary("5*6*2"), ("5", "6"));
    }

    #[test]
    fn bays_summary_defaults() {
        assert_eq!(bays_summary(""), ("4", "6"));
        assert_eq!(bays_summary("10"), ("10", "6"));
        assert_eq!(bays_summary("*9"), ("4", "9"));
        assert_eq!(bays_summary("3*"), ("3", "6"));
    }
}
