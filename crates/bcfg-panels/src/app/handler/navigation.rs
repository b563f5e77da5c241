//! Left navigation handlers.

use tracing::debug;

use bcfg_model::{DimensionsPatch, RoofPatch};

use crate::app::Configurator;
use crate::input::{CRANE_CAPACITY_FALLBACK, EAVE_HEIGHT_FALLBACK, WIDTH_FALLBACK, number_or};
use crate::message::NavigationMessage;

impl Configurator {
    pub(crate) fn handle_navigation_message(&mut self, msg: NavigationMessage) {
        match msg {
            NavigationMessage::SectionClicked(panel) => {
                // Clicking the open section collapses the accordion.
                let next = if self.store.state().active_panel() == panel.as_str() {
                    ""
                } else {
                    panel.as_str()
                };
                debug!(panel = next, "active section changed");
                self.store.set_active_panel(next);
            }

            NavigationMessage::WidthChanged(raw) => {
                let width = number_or(&raw, WIDTH_FALLBACK);
                self.store
                    .update_dimensions(DimensionsPatch::default().width(width));
            }

            NavigationMessage::FrameTypeSelected(frame_type) => {
                self.store.update_frame_type(frame_type);
            }

            NavigationMessage::BaysPatternChanged(pattern) => {
                self.store
                    .update_dimensions(DimensionsPatch::default().bays_pattern(pattern));
            }

            NavigationMessage::EaveHeightChanged(raw) => {
                let height = number_or(&raw, EAVE_HEIGHT_FALLBACK);
                self.store
                    .update_dimensions(DimensionsPatch::default().eave_height(height));
            }

            NavigationMessage::RoofTypeSelected(roof_type) => {
                self.store
                    .update_roof(RoofPatch::default().roof_type(roof_type));
            }

            NavigationMessage::RoofOrientationSelected(orientation) => {
                self.store
                    .update_roof(RoofPatch::default().orientation(orientation));
            }

            NavigationMessage::SlopeSelected(slope) => {
                self.store.update_roof(RoofPatch::default().slope(slope));
            }

            NavigationMessage::CraneCapacityChanged(raw) => {
                let capacity = number_or(&raw, CRANE_CAPACITY_FALLBACK);
                self.store.update_crane(capacity);
            }
        }
    }
}
