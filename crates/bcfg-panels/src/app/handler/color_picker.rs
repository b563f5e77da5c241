//! Colour picker handlers.

use bcfg_model::ColorsPatch;

use crate::app::Configurator;
use crate::message::ColorPickerMessage;

impl Configurator {
    pub(crate) fn handle_color_picker_message(&mut self, msg: ColorPickerMessage) {
        match msg {
            ColorPickerMessage::Toggled(slot) => {
                self.ui.open_picker = if self.ui.open_picker == Some(slot) {
                    None
                } else {
                    Some(slot)
                };
            }

            ColorPickerMessage::Dismissed => {
                self.ui.open_picker = None;
            }

            ColorPickerMessage::Chosen { slot, code } => {
                self.store.update_colors(ColorsPatch::slot(slot, code));
                self.ui.open_picker = None;
            }
        }
    }
}
