//! Top control bar.

use serde::Serialize;

use bcfg_model::ViewMode;
use bcfg_store::ConfiguratorState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopControlBarView {
    pub view_buttons: Vec<ViewButton>,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewButton {
    pub mode: ViewMode,
    pub tooltip: &'static str,
    pub active: bool,
}

pub fn top_control_bar_view(state: &ConfiguratorState) -> TopControlBarView {
    let current = state.view_mode();
    TopControlBarView {
        view_buttons: ViewMode::ALL
            .into_iter()
            .map(|mode| ViewButton {
                mode,
                tooltip: mode.label(),
                active: mode == current,
            })
            .collect(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
    }
}
