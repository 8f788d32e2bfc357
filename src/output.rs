//! Output Signals
//!
//! One reactive text per output slot; the bridge writes, the panels read.

use form_bridge::{Output, Slot};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OutputSignals {
    connectivity: RwSignal<String>,
    user_data: RwSignal<String>,
    upload: RwSignal<String>,
    summary: RwSignal<String>,
    translation: RwSignal<String>,
    analysis: RwSignal<String>,
    advice: RwSignal<String>,
}

impl OutputSignals {
    pub fn new() -> Self {
        Self {
            connectivity: RwSignal::new(String::new()),
            user_data: RwSignal::new(String::new()),
            upload: RwSignal::new(String::new()),
            summary: RwSignal::new(String::new()),
            translation: RwSignal::new(String::new()),
            analysis: RwSignal::new(String::new()),
            advice: RwSignal::new(String::new()),
        }
    }

    pub fn slot(&self, slot: Slot) -> RwSignal<String> {
        match slot {
            Slot::Connectivity => self.connectivity,
            Slot::UserData => self.user_data,
            Slot::Upload => self.upload,
            Slot::Summary => self.summary,
            Slot::Translation => self.translation,
            Slot::Analysis => self.analysis,
            Slot::Advice => self.advice,
        }
    }
}

impl Output for OutputSignals {
    fn render(&self, slot: Slot, text: &str) {
        self.slot(slot).set(text.to_string());
    }
}
