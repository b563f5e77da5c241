//! Configurator state and its read-only accessors.
//!
//! Fields are crate-private; the only way to change a state is through
//! [`crate::reduce`] (or the store that wraps it).

use std::sync::Arc;

use bcfg_model::{BuildingConfig, TemplateType, ViewMode, VisualizationSettings};

use crate::history::History;

/// Panel shown when the configurator opens.
pub const DEFAULT_ACTIVE_PANEL: &str = "building";

#[derive(Debug, Clone)]
pub struct ConfiguratorState {
    pub(crate) building: Option<Arc<BuildingConfig>>,
    pub(crate) selected_template: Option<TemplateType>,
    pub(crate) active_panel: String,
    pub(crate) visualization: VisualizationSettings,
    pub(crate) view_mode: ViewMode,
    pub(crate) history: History<BuildingConfig>,
}

impl Default for ConfiguratorState {
    fn default() -> Self {
        Self {
            building: None,
            selected_template: None,
            active_panel: DEFAULT_ACTIVE_PANEL.to_string(),
            visualization: VisualizationSettings::default(),
            view_mode: ViewMode::default(),
            history: History::new(),
        }
    }
}

impl ConfiguratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given visualization toggles instead of the defaults.
    #[must_use]
    pub fn with_visualization(mut self, visualization: VisualizationSettings) -> Self {
        self.visualization = visualization;
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    #[must_use]
    pub fn with_active_panel(mut self, panel: impl Into<String>) -> Self {
        self.active_panel = panel.into();
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.building.is_some()
    }

    pub fn building_config(&self) -> Option<&BuildingConfig> {
        self.building.as_deref()
    }

    /// The shared snapshot behind [`Self::building_config`].
    pub fn building_snapshot(&self) -> Option<&Arc<BuildingConfig>> {
        self.building.as_ref()
    }

    pub fn selected_template(&self) -> Option<TemplateType> {
        self.selected_template
    }

    pub fn active_panel(&self) -> &str {
        &self.active_panel
    }

    pub fn visualization(&self) -> &VisualizationSettings {
        &self.visualization
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn history(&self) -> &History<BuildingConfig> {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current history position, `None` while the history is empty.
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = ConfiguratorState::new();
        assert!(!state.is_initialized());
        assert_eq!(state.selected_template(), None);
        assert_eq!(state.active_panel(), "building");
        assert_eq!(state.view_mode(), ViewMode::Perspective);
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.history_index(), None);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn builders_override_preferences() {
        let mut visualization = VisualizationSettings::default();
        visualization.show_edges = false;
        let state = ConfiguratorState::new()
            .with_visualization(visualization)
            .with_view_mode(ViewMode::Top)
            .with_active_panel("quote");

        assert_eq!(state.visualization(), &visualization);
        assert_eq!(state.view_mode(), ViewMode::Top);
        assert_eq!(state.active_panel(), "quote");
    }
}
