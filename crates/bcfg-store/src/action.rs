//! Actions accepted by the store.
//!
//! The JSON form is internally tagged by `action`, e.g.
//! `{"action": "update_dimensions", "width": 24.0}`.

use serde::{Deserialize, Serialize};

use bcfg_model::{
    Accessory, ColorsPatch, DimensionsPatch, Opening, RoofPatch, TemplateType, ViewMode,
    VisualizationPatch,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Replace the configuration with the template default and restart history.
    InitializeBuilding { template: TemplateType },
    SetSelectedTemplate { template: TemplateType },
    UpdateDimensions(DimensionsPatch),
    UpdateRoof(RoofPatch),
    UpdateColors(ColorsPatch),
    UpdateFrameType { frame_type: String },
    /// A capacity of zero or less removes the crane.
    UpdateCrane { capacity: f64 },
    AddOpening(Opening),
    /// Removes every opening carrying the id.
    RemoveOpening { id: String },
    AddAccessory(Accessory),
    RemoveAccessory { id: String },
    SetVisualization(VisualizationPatch),
    SetActivePanel { panel: String },
    SetViewMode { mode: ViewMode },
    Undo,
    Redo,
    /// Drop the configuration, the selected template and the whole history.
    ResetConfig,
}

impl Action {
    /// Stable snake_case name, matching the JSON tag.
    pub fn name(&self) -> &'static str {
        match self {
            Action::InitializeBuilding { .. } => "initialize_building",
            Action::SetSelectedTemplate { .. } => "set_selected_template",
            Action::UpdateDimensions(_) => "update_dimensions",
            Action::UpdateRoof(_) => "update_roof",
            Action::UpdateColors(_) => "update_colors",
            Action::UpdateFrameType { .. } => "update_frame_type",
            Action::UpdateCrane { .. } => "update_crane",
            Action::AddOpening(_) => "add_opening",
            Action::RemoveOpening { .. } => "remove_opening",
            Action::AddAccessory(_) => "add_accessory",
            Action::RemoveAccessory { .. } => "remove_accessory",
            Action::SetVisualization(_) => "set_visualization",
            Action::SetActivePanel { .. } => "set_active_panel",
            Action::SetViewMode { .. } => "set_view_mode",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::ResetConfig => "reset_config",
        }
    }

    /// Whether a successful application appends a history snapshot.
    pub fn records_history(&self) -> bool {
        matches!(
            self,
            Action::UpdateDimensions(_)
                | Action::UpdateRoof(_)
                | Action::UpdateColors(_)
                | Action::UpdateFrameType { .. }
                | Action::UpdateCrane { .. }
                | Action::AddOpening(_)
                | Action::RemoveOpening { .. }
                | Action::AddAccessory(_)
                | Action::RemoveAccessory { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcfg_model::{OpeningType, Wall};

    #[test]
    fn deserializes_tagged_patch() {
        let action: Action =
            serde_json::from_str(r#"{"action": "update_dimensions", "width": 24.0}"#)
                .expect("parse action");
        assert_eq!(
            action,
            Action::UpdateDimensions(DimensionsPatch::default().width(24.0))
        );
        assert_eq!(action.name(), "update_dimensions");
    }

    #[test]
    fn deserializes_opening_with_type_field() {
        let action: Action = serde_json::from_str(
            r#"{"action": "add_opening", "id": "d1", "type": "door", "wall": "front"}"#,
        )
        .expect("parse action");
        assert_eq!(
            action,
            Action::AddOpening(Opening::new("d1", OpeningType::Door, Wall::Front))
        );
    }

    #[test]
    fn unit_actions_only_need_the_tag() {
        let action: Action = serde_json::from_str(r#"{"action": "undo"}"#).expect("parse undo");
        assert_eq!(action, Action::Undo);
        assert!(!action.records_history());
    }

    #[test]
    fn name_matches_serialized_tag() {
        let actions = [
            Action::InitializeBuilding {
                template: TemplateType::Hangar,
            },
            Action::UpdateCrane { capacity: 5.0 },
            Action::SetViewMode {
                mode: ViewMode::Front,
            },
            Action::ResetConfig,
        ];
        for action in actions {
            let value = serde_json::to_value(&action).expect("serialize action");
            assert_eq!(value["action"], action.name());
        }
    }
}
