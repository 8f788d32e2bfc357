//! Upload Form Component
//!
//! Sends a file to the backend storage.

use form_bridge::Slot;
use leptos::html;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;
use crate::forms;

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else { return };
        ctx.spawn(move |bridge| async move {
            match forms::read_multipart(&form).await {
                Ok(payload) => bridge.upload(payload).await,
                Err(e) => bridge.fail(Slot::Upload, e),
            }
        });
    };

    view! {
        <section class="panel">
            <h2>"Envoyer un fichier"</h2>
            <form id=ctx.ids.upload_form node_ref=form_ref on:submit=on_submit>
                <input type="file" name="file" />
                <button type="submit">"Uploader"</button>
            </form>
            <ResponseLine slot=Slot::Upload />
        </section>
    }
}
