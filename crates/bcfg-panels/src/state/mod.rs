//! Panel-local state.
//!
//! - `navigation`: left navigation section ids
//! - `ui`: popovers, collapsibles and the inquiry draft

pub mod navigation;
pub mod ui;

pub use navigation::PanelId;
pub use ui::{QuoteDraft, UiState};
