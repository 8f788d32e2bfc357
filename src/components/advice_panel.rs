//! Advice Panel Component
//!
//! Nutrition advice for the foods recognized by the last analysis.

use form_bridge::Slot;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;

#[component]
pub fn AdvicePanel() -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();

    let on_click = move |_: web_sys::MouseEvent| {
        ctx.spawn(|bridge| async move { bridge.request_advice().await });
    };

    view! {
        <section class="panel">
            <h2>"Conseils nutritionnels"</h2>
            <button id=ctx.ids.advice_button type="button" on:click=on_click>
                "Obtenir des conseils"
            </button>
            <ResponseLine slot=Slot::Advice />
        </section>
    }
}
