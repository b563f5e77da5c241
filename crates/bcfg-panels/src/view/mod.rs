//! View models derived from store and panel state.
//!
//! Each function here is pure: it reads state and returns plain data that a
//! renderer can draw without touching the store.

pub mod color_picker;
pub mod left_navigation;
pub mod right_sidebar;
pub mod top_control_bar;

use serde::Serialize;

pub use color_picker::{
    ColorOptionView, ColorPickerView, SwatchView, color_picker_view, color_swatch,
};
pub use left_navigation::{
    AccessorySection, BaysSection, BuildingSection, LeftNavigationView, OpeningRow,
    OpeningsSection, QuoteSection, SectionHeader, SheetingSection, StructureSection, bays_summary,
    left_navigation_view,
};
pub use right_sidebar::{
    PART_FLAGS, QuickStats, RenderMode, RightSidebarView, SWITCH_FLAGS, ToggleView,
    right_sidebar_view,
};
pub use top_control_bar::{TopControlBarView, ViewButton, top_control_bar_view};

/// One entry of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}
