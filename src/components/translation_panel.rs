//! Translation Panel Component
//!
//! Translates the last generated summary.

use form_bridge::Slot;
use leptos::html;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;

/// Target languages (code, label)
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "Anglais"),
    ("es", "Espagnol"),
    ("de", "Allemand"),
    ("it", "Italien"),
    ("fr", "Français"),
];

#[component]
pub fn TranslationPanel() -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();
    let select_ref = NodeRef::<html::Select>::new();

    let on_click = move |_: web_sys::MouseEvent| {
        let language = select_ref
            .get()
            .map(|el| el.value())
            .unwrap_or_else(|| LANGUAGES[0].0.to_string());
        ctx.spawn(move |bridge| async move { bridge.translate_summary(&language).await });
    };

    view! {
        <section class="panel">
            <h2>"Traduction"</h2>
            <select id=ctx.ids.language node_ref=select_ref>
                {LANGUAGES.iter().map(|(code, label)| view! {
                    <option value=*code>{*label}</option>
                }).collect_view()}
            </select>
            <button id=ctx.ids.translate_button type="button" on:click=on_click>
                "Traduire le résumé"
            </button>
            <ResponseLine slot=Slot::Translation />
        </section>
    }
}
