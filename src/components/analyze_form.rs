//! Analyze Form Component
//!
//! Sends a meal photo for food recognition.

use form_bridge::Slot;
use leptos::html;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;
use crate::forms;

#[component]
pub fn AnalyzeForm() -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else { return };
        ctx.spawn(move |bridge| async move {
            match forms::read_multipart(&form).await {
                Ok(payload) => bridge.analyze_image(payload).await,
                Err(e) => bridge.fail(Slot::Analysis, e),
            }
        });
    };

    view! {
        <section class="panel">
            <h2>"Analyse d'image"</h2>
            <form id=ctx.ids.analyze_form node_ref=form_ref on:submit=on_submit>
                <input type="file" name="file" accept="image/*" />
                <button type="submit">"Analyser"</button>
            </form>
            <ResponseLine slot=Slot::Analysis />
        </section>
    }
}
