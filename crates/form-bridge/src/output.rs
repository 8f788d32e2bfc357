//! Output Slots
//!
//! Where each handler writes its result.

use crate::config::ElementIds;
use crate::error::BridgeError;
use crate::messages;

/// One output element per handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Connectivity,
    UserData,
    Upload,
    Summary,
    Translation,
    Analysis,
    Advice,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::Connectivity,
        Slot::UserData,
        Slot::Upload,
        Slot::Summary,
        Slot::Translation,
        Slot::Analysis,
        Slot::Advice,
    ];

    /// Fixed text rendered when the handler fails
    pub fn failure_text(self) -> &'static str {
        match self {
            Slot::Connectivity => messages::CONNECTIVITY_ERROR,
            Slot::UserData => messages::USER_DATA_ERROR,
            Slot::Upload => messages::UPLOAD_ERROR,
            Slot::Summary => messages::SUMMARY_ERROR,
            Slot::Translation => messages::TRANSLATION_ERROR,
            Slot::Analysis => messages::ANALYSIS_ERROR,
            Slot::Advice => messages::ADVICE_ERROR,
        }
    }

    /// Id of the element displaying this slot
    pub fn element_id(self, ids: &ElementIds) -> &'static str {
        match self {
            Slot::Connectivity => ids.response,
            Slot::UserData => ids.form_response,
            Slot::Upload => ids.upload_response,
            Slot::Summary => ids.summary_response,
            Slot::Translation => ids.translation_response,
            Slot::Analysis => ids.analyze_response,
            Slot::Advice => ids.advice_response,
        }
    }
}

/// Sink the handlers render into
///
/// Writes are last-write-wins; no ordering between overlapping requests.
pub trait Output {
    /// Replace the slot's text
    fn render(&self, slot: Slot, text: &str);

    /// Record a caught failure for diagnostics
    fn report(&self, slot: Slot, error: &BridgeError) {
        log::error!("{:?} handler failed: {}", slot, error);
    }
}
