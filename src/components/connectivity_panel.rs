//! Connectivity Panel Component
//!
//! Button pinging the backend health endpoint.

use form_bridge::Slot;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;

#[component]
pub fn ConnectivityPanel() -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();

    let on_click = move |_: web_sys::MouseEvent| {
        ctx.spawn(|bridge| async move { bridge.check_connection().await });
    };

    view! {
        <section class="panel">
            <h2>"Connexion au backend"</h2>
            <button id=ctx.ids.test_button type="button" on:click=on_click>
                "Tester la connexion"
            </button>
            <ResponseLine slot=Slot::Connectivity />
        </section>
    }
}
