//! Left navigation messages.
//!
//! Numeric fields carry the raw text the user typed; the handler applies the
//! fallback before anything reaches the store.

use bcfg_model::{RoofOrientation, RoofType};

use crate::state::PanelId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    // =========================================================================
    // Accordion
    // =========================================================================
    /// Section header clicked. Opens the section, or collapses it if open.
    SectionClicked(PanelId),

    // =========================================================================
    // Building section
    // =========================================================================
    WidthChanged(String),
    FrameTypeSelected(String),
    BaysPatternChanged(String),
    EaveHeightChanged(String),
    RoofTypeSelected(RoofType),
    RoofOrientationSelected(RoofOrientation),
    SlopeSelected(String),

    // =========================================================================
    // Accessory section
    // =========================================================================
    CraneCapacityChanged(String),
}
