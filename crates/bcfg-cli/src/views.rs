//! Panel view models captured after a replay.

use serde::Serialize;

use bcfg_panels::Configurator;
use bcfg_panels::view::{LeftNavigationView, RightSidebarView, TopControlBarView};

/// Everything the three panels would draw for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelViews {
    /// `None` until a building is configured.
    pub left_navigation: Option<LeftNavigationView>,
    pub right_sidebar: RightSidebarView,
    pub top_control_bar: TopControlBarView,
}

impl PanelViews {
    pub fn capture(app: &Configurator) -> Self {
        Self {
            left_navigation: app.left_navigation(),
            right_sidebar: app.right_sidebar(),
            top_control_bar: app.top_control_bar(),
        }
    }
}
