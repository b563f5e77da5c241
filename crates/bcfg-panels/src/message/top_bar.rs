//! Top control bar messages.

use bcfg_model::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarMessage {
    ViewModeClicked(ViewMode),
    UndoClicked,
    RedoClicked,
    HelpClicked,
    SaveClicked,
    ShareClicked,
}
