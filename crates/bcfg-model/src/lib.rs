pub mod building;
pub mod enums;
pub mod error;
pub mod palette;
pub mod patch;
pub mod quote;
pub mod template;
pub mod visualization;

pub use building::{Accessory, BuildingConfig, ColorScheme, Crane, Dimensions, Opening, RoofConfig};
pub use enums::{AccessoryKind, OpeningType, RoofOrientation, RoofType, ViewMode, Wall};
pub use error::{ModelError, Result};
pub use palette::{RAL_COLORS, RalColor, find_color, resolve_color};
pub use patch::{ColorSlot, ColorsPatch, DimensionsPatch, RoofPatch, VisualizationPatch};
pub use quote::{
    BUILDING_APPLICATIONS, BUILDING_SECTORS, DEFAULT_APPLICATION, DEFAULT_REALIZATION_YEAR,
    DEFAULT_SECTOR, REALIZATION_YEARS, ReferralSource,
};
pub use template::{
    BUILDING_TEMPLATES, BuildingTemplate, FRAME_TYPES, FrameType, SLOPE_OPTIONS, TemplateType,
    create_default_building_config, frame_type,
};
pub use visualization::{VisualizationFlag, VisualizationSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serializes() {
        let config = create_default_building_config(TemplateType::Workshop);
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: BuildingConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round, config);
    }
}
