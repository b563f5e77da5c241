//! Inquiry draft messages.

use bcfg_model::ReferralSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteMessage {
    SectorSelected(String),
    ApplicationSelected(String),
    RealizationYearSelected(u16),
    ReferralSelected(ReferralSource),
    NotesChanged(String),
    /// "Send Inquiry" clicked. The draft is kept as is; nothing is sent.
    SendClicked,
}
