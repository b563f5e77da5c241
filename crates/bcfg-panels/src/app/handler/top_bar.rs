//! Top control bar handlers.

use tracing::debug;

use crate::app::Configurator;
use crate::message::TopBarMessage;

impl Configurator {
    pub(crate) fn handle_top_bar_message(&mut self, msg: TopBarMessage) {
        match msg {
            TopBarMessage::ViewModeClicked(mode) => {
                self.store.set_view_mode(mode);
            }

            // Disabled buttons emit nothing.
            TopBarMessage::UndoClicked => {
                if self.store.can_undo() {
                    self.store.undo();
                }
            }

            TopBarMessage::RedoClicked => {
                if self.store.can_redo() {
                    self.store.redo();
                }
            }

            TopBarMessage::HelpClicked
            | TopBarMessage::SaveClicked
            | TopBarMessage::ShareClicked => {
                debug!(?msg, "button has no action");
            }
        }
    }
}
