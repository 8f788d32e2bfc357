//! NutriAI Frontend App
//!
//! Builds the bridge and lays out one panel per backend interaction.

use form_bridge::{BridgeConfig, FormBridge, HttpTransport};
use leptos::prelude::*;

use crate::components::{
    AdvicePanel, AnalyzeForm, ConnectivityPanel, ProfileInputs, SummaryPanel, TranslationPanel,
    UploadForm, UserForm,
};
use crate::context::BridgeContext;
use crate::output::OutputSignals;

#[component]
pub fn App(config: BridgeConfig) -> impl IntoView {
    let transport = HttpTransport::new(config.base_url.clone());
    let bridge = FormBridge::new(config, transport, OutputSignals::new());

    // Provide context to all children
    provide_context(BridgeContext::new(bridge));

    // Shared by the user form (renders them) and the summary panel (reads them)
    let profile = ProfileInputs::new();

    view! {
        <main class="app-layout">
            <h1>"NutriAI"</h1>
            <ConnectivityPanel />
            <UserForm inputs=profile />
            <SummaryPanel inputs=profile />
            <TranslationPanel />
            <UploadForm />
            <AnalyzeForm />
            <AdvicePanel />
        </main>
    }
}
