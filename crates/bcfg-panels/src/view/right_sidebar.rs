//! Right display sidebar.

use serde::Serialize;

use bcfg_model::{VisualizationFlag, VisualizationSettings};
use bcfg_store::ConfiguratorState;

use crate::state::UiState;

/// Flags shown as switches in the "Visualization" section.
pub const SWITCH_FLAGS: [VisualizationFlag; 2] =
    [VisualizationFlag::Edges, VisualizationFlag::Faces];

/// Flags shown as checkboxes in the "Main Parts" section.
pub const PART_FLAGS: [VisualizationFlag; 11] = [
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RightSidebarView {
    pub visualization_open: bool,
    pub parts_open: bool,
    pub switches: Vec<ToggleView>,
    pub parts: Vec<ToggleView>,
    pub stats: QuickStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub flag: VisualizationFlag,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub visible: usize,
    pub total: usize,
    pub mode: RenderMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    Solid,
    Wireframe,
}

impl RenderMode {
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Solid => "Solid",
            RenderMode::Wireframe => "Wireframe",
        }
    }
}

impl QuickStats {
    pub fn from_settings(settings: &VisualizationSettings) -> Self {
        Self {
            visible: settings.visible_count(),
            total: VisualizationFlag::ALL.len(),
            mode: if settings.show_faces {
                RenderMode::Solid
            } else {
                RenderMode::Wireframe
            },
        }
    }
}

pub fn right_sidebar_view(state: &ConfiguratorState, ui: &UiState) -> RightSidebarView {
    let settings = state.visualization();
    let toggle = |flag: VisualizationFlag| ToggleView {
        flag,
        label: flag.label(),
        checked: settings.get(flag),
    };

    RightSidebarView {
        visualization_open: ui.visualization_open,
        parts_open: ui.parts_open,
        switches: SWITCH_FLAGS.into_iter().map(toggle).collect(),
        parts: PART_FLAGS.into_iter().map(toggle).collect(),
        stats: QuickStats::from_settings(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sidebar_covers_every_flag_once() {
        let flags: HashSet<VisualizationFlag> =
            SWITCH_FLAGS.into_iter().chain(PART_FLAGS).collect();
        assert_eq!(flags.len(), SWITCH_FLAGS.len() + PART_FLAGS.len());
        for flag in VisualizationFlag::ALL {
            assert!(flags.contains(&flag), "{flag} missing");
        }
    }

    #[test]
    fn default_stats() {
        let stats = QuickStats::from_settings(&VisualizationSettings::default());
        assert_eq!(stats.visible, 11);
        assert_eq!(stats.total, 13);
        assert_eq!(stats.mode, RenderMode::Solid);
    }

    #[test]
    fn hidden_faces_mean_wireframe() {
        let settings = VisualizationSettings {
            show_faces: false,
            ..VisualizationSettings::default()
        };
        assert_eq!(QuickStats::from_settings(&settings).mode.label(), "Wireframe");
    }
}
