//! Response Line Component
//!
//! Output element a handler renders into.

use form_bridge::Slot;
use leptos::prelude::*;

use crate::context::BridgeContext;

#[component]
pub fn ResponseLine(
    /// Which handler writes here; picks both the element id and the signal
    slot: Slot,
) -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();
    let id = slot.element_id(&ctx.ids);
    let text = ctx.outputs.slot(slot);

    view! {
        <p id=id class="response" aria-live="polite">{move || text.get()}</p>
    }
}
