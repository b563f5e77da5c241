//! Transient panel state.
//!
//! Popover and collapsible state plus the inquiry draft. None of it lives in
//! the store and none of it is versioned.

use serde::Serialize;

use bcfg_model::{
    ColorSlot, DEFAULT_APPLICATION, DEFAULT_REALIZATION_YEAR, DEFAULT_SECTOR, ReferralSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Colour picker whose popover is open, if any.
    pub open_picker: Option<ColorSlot>,
    /// Right sidebar "Visualization" section expanded.
    pub visualization_open: bool,
    /// Right sidebar "Main Parts" section expanded.
    pub parts_open: bool,
    pub quote: QuoteDraft,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            open_picker: None,
            visualization_open: true,
            parts_open: true,
            quote: QuoteDraft::default(),
        }
    }
}

/// Inquiry form contents. Held locally, never submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDraft {
    pub sector: String,
    pub application: String,
    pub realization_year: u16,
    pub referral: Option<ReferralSource>,
    pub notes: String,
}

impl Default for QuoteDraft {
    fn default() -> Self {
        Self {
            sector: DEFAULT_SECTOR.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            realization_year: DEFAULT_REALIZATION_YEAR,
            referral: None,
            notes: String::new(),
        }
    }
}
