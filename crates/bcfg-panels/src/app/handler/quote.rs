//! Inquiry draft handlers.
//!
//! The draft only ever changes locally; sending is not implemented.

use tracing::{debug, info};

use crate::app::Configurator;
use crate::message::QuoteMessage;

impl Configurator {
    pub(crate) fn handle_quote_message(&mut self, msg: QuoteMessage) {
        let draft = &mut self.ui.quote;
        match msg {
            QuoteMessage::SectorSelected(sector) => draft.sector = sector,
            QuoteMessage::ApplicationSelected(application) => draft.application = application,
            QuoteMessage::RealizationYearSelected(year) => draft.realization_year = year,
            QuoteMessage::ReferralSelected(source) => draft.referral = Some(source),
            QuoteMessage::NotesChanged(notes) => draft.notes = notes,
            QuoteMessage::SendClicked => {
                info!(
                    sector = %draft.sector,
                    application = %draft.application,
                    year = draft.realization_year,
                    "inquiry draft kept locally, not sent"
                );
                return;
            }
        }
        debug!("inquiry draft updated");
    }
}
