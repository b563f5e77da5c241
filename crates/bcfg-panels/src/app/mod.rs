//! The configurator application core.
//!
//! Follows the Elm pattern: panels emit [`Message`]s, [`Configurator::update`]
//! routes them to handlers that call store actions, and view models are
//! derived afresh from the store plus the transient [`UiState`].
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers organized by panel

mod handler;

use tracing::debug;

use bcfg_store::{ConfiguratorState, ConfiguratorStore};

use crate::message::Message;
use crate::state::UiState;
use crate::view::{
    LeftNavigationView, RightSidebarView, TopControlBarView, left_navigation_view,
    right_sidebar_view, top_control_bar_view,
};

/// Panel layer bound to one store.
#[derive(Debug, Default)]
pub struct Configurator {
    store: ConfiguratorStore,
    ui: UiState,
}

impl Configurator {
    pub fn new(store: ConfiguratorStore) -> Self {
        Self {
            store,
            ui: UiState::default(),
        }
    }

    pub fn store(&self) -> &ConfiguratorStore {
        &self.store
    }

    /// Mutable access for subscribing to store changes.
    pub fn store_mut(&mut self) -> &mut ConfiguratorStore {
        &mut self.store
    }

    pub fn state(&self) -> &ConfiguratorState {
        self.store.state()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Handle one message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::TemplateChosen(template) => {
                debug!(template = template.as_str(), "template chosen");
                self.ui.open_picker = None;
                self.store.initialize_building(template);
            }
            Message::ResetRequested => {
                self.ui.open_picker = None;
                self.store.reset_config();
            }
            Message::Navigation(msg) => self.handle_navigation_message(msg),
            Message::ColorPicker(msg) => self.handle_color_picker_message(msg),
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
            Message::TopBar(msg) => self.handle_top_bar_message(msg),
            Message::Quote(msg) => self.handle_quote_message(msg),
            Message::Noop => {}
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Left navigation, or `None` while no building is configured.
    pub fn left_navigation(&self) -> Option<LeftNavigationView> {
        left_navigation_view(self.store.state(), &self.ui)
    }

    pub fn right_sidebar(&self) -> RightSidebarView {
        right_sidebar_view(self.store.state(), &self.ui)
    }

    pub fn top_control_bar(&self) -> TopControlBarView {
        top_control_bar_view(self.store.state())
    }
}
