//! User Form Component
//!
//! Goal / allergies / preferences form saved to the backend.
//! Its inputs are shared with the summary panel.

use form_bridge::Slot;
use leptos::html;
use leptos::prelude::*;

use crate::components::ResponseLine;
use crate::context::BridgeContext;
use crate::forms;

/// Handles on the three profile inputs
#[derive(Clone, Copy)]
pub struct ProfileInputs {
    pub goal: NodeRef<html::Input>,
    pub allergies: NodeRef<html::Input>,
    pub preferences: NodeRef<html::Input>,
}

impl ProfileInputs {
    pub fn new() -> Self {
        Self {
            goal: NodeRef::new(),
            allergies: NodeRef::new(),
            preferences: NodeRef::new(),
        }
    }
}

/// Current value of an input, empty while unmounted
pub fn input_value(input: NodeRef<html::Input>) -> String {
    input.get().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn UserForm(inputs: ProfileInputs) -> impl IntoView {
    let ctx = expect_context::<BridgeContext>();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else { return };
        match forms::read_user_data(&form) {
            Ok(data) => ctx.spawn(move |bridge| async move { bridge.submit_user_data(data).await }),
            Err(e) => ctx.bridge().fail(Slot::UserData, e),
        }
    };

    view! {
        <section class="panel">
            <h2>"Vos informations"</h2>
            <form id=ctx.ids.user_form node_ref=form_ref on:submit=on_submit>
                <label>
                    "Objectif"
                    <input id=ctx.ids.goal name="goal" type="text" node_ref=inputs.goal />
                </label>
                <label>
                    "Allergies"
                    <input id=ctx.ids.allergies name="allergies" type="text" node_ref=inputs.allergies />
                </label>
                <label>
                    "Préférences alimentaires"
                    <input id=ctx.ids.preferences name="preferences" type="text" node_ref=inputs.preferences />
                </label>
                <button type="submit">"Enregistrer"</button>
            </form>
            <ResponseLine slot=Slot::UserData />
        </section>
    }
}
