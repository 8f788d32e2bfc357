//! Summary Panel Component
//!
//! Generates a summary from the profile inputs.

use form_bridge::{Slot, SummaryRequest};
use leptos::prelude::*;

use crate::components::user_form::{input_value, ProfileInputs};
use crate::components::ResponseLine;
use crate::context::BridgeContext;

#[component]
pub fn SummaryPanel(inputs: ProfileInputs) -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();

    let on_click = move |_: web_sys::MouseEvent| {
        let request = SummaryRequest {
            goal: input_value(inputs.goal),
            allergies: input_value(inputs.allergies),
            preferences: input_value(inputs.preferences),
        };
        ctx.spawn(move |bridge| async move { bridge.generate_summary(request).await });
    };

    view! {
        <section class="panel">
            <h2>"Résumé"</h2>
            <button id=ctx.ids.summary_button type="button" on:click=on_click>
                "Générer le résumé"
            </button>
            <ResponseLine slot=Slot::Summary />
        </section>
    }
}
