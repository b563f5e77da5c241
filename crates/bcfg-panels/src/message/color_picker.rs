//! Colour picker messages.

use bcfg_model::ColorSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorPickerMessage {
    /// Trigger button clicked; toggles the popover for this slot.
    Toggled(ColorSlot),

    /// Popover dismissed without a choice.
    Dismissed,

    /// Palette entry chosen. Carries the RAL code.
    Chosen { slot: ColorSlot, code: String },
}
