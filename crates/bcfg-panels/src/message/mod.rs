//! Message hierarchy for the configurator panels.
//!
//! Every user interaction is expressed as a [`Message`]. The
//! [`crate::Configurator::update`] function routes each message to the
//! handler of the panel it belongs to.

pub mod color_picker;
pub mod navigation;
pub mod quote;
pub mod sidebar;
pub mod top_bar;

use bcfg_model::TemplateType;

pub use color_picker::ColorPickerMessage;
pub use navigation::NavigationMessage;
pub use quote::QuoteMessage;
pub use sidebar::SidebarMessage;
pub use top_bar::TopBarMessage;

/// Root message enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // =========================================================================
    // Lifecycle
    // =========================================================================
    /// A building template was chosen; starts a fresh configuration.
    TemplateChosen(TemplateType),

    /// Discard the configuration and its history.
    ResetRequested,

    // =========================================================================
    // Panels
    // =========================================================================
    /// Left navigation accordion and its forms
    Navigation(NavigationMessage),

    /// Colour picker popovers
    ColorPicker(ColorPickerMessage),

    /// Right display sidebar
    Sidebar(SidebarMessage),

    /// Top control bar
    TopBar(TopBarMessage),

    /// Inquiry draft in the quote section
    Quote(QuoteMessage),

    /// No operation
    Noop,
}

impl From<NavigationMessage> for Message {
    fn from(msg: NavigationMessage) -> Self {
        Message::Navigation(msg)
    }
}

impl From<ColorPickerMessage> for Message {
    fn from(msg: ColorPickerMessage) -> Self {
        Message::ColorPicker(msg)
    }
}

impl From<SidebarMessage> for Message {
    fn from(msg: SidebarMessage) -> Self {
        Message::Sidebar(msg)
    }
}

impl From<TopBarMessage> for Message {
    fn from(msg: TopBarMessage) -> Self {
        Message::TopBar(msg)
    }
}

impl From<QuoteMessage> for Message {
    fn from(msg: QuoteMessage) -> Self {
        Message::Quote(msg)
    }
}
