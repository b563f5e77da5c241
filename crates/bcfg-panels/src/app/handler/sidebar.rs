//! Right sidebar handlers.

use bcfg_model::VisualizationPatch;

use crate::app::Configurator;
use crate::message::SidebarMessage;

impl Configurator {
    pub(crate) fn handle_sidebar_message(&mut self, msg: SidebarMessage) {
        match msg {
            SidebarMessage::FlagToggled(flag, visible) => {
                self.store
                    .set_visualization(VisualizationPatch::flag(flag, visible));
            }

            SidebarMessage::VisualizationSectionToggled => {
                self.ui.visualization_open = !self.ui.visualization_open;
            }

            SidebarMessage::PartsSectionToggled => {
                self.ui.parts_open = !self.ui.parts_open;
            }
        }
    }
}
