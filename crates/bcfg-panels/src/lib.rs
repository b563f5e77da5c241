//! Headless panel controllers for the building configurator.
//!
//! The panels never render anything. They turn user input into store actions
//! and derive plain view models from the store:
//!
//! - [`message`]: everything a user can do, as data
//! - [`Configurator`]: routes messages to handlers bound to one store
//! - [`view`]: left navigation, colour pickers, right sidebar, top bar
//! - [`input`]: numeric field fallbacks

pub mod app;
pub mod input;
pub mod message;
pub mod state;
pub mod view;

pub use app::Configurator;
pub use message::{
    ColorPickerMessage, Message, NavigationMessage, QuoteMessage, SidebarMessage, TopBarMessage,
};
pub use state::{PanelId, QuoteDraft, UiState};
