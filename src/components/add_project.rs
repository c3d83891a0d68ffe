//! Project Creation Form Component
//!
//! Two text fields, no client-side validation. The create call, the
//! caller-supplied refresh, and the field reset are chained on the
//! success variant only; failures are logged and leave the draft
//! intact for a manual retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::state::{DraftAction, DraftState};

#[component]
pub fn AddProject(client: ApiClient, on_created: Callback<()>) -> impl IntoView {
    let (draft, set_draft) = signal(DraftState::default());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let DraftState { title, description } = draft.get();
        let client = client.clone();

        spawn_local(async move {
            match client.create_project(&title, &description).await {
                Ok(created) => {
                    log::debug!("created project {}", created.id);
                    on_created.run(());
                    set_draft.update(|d| d.apply(DraftAction::Clear));
                }
                Err(err) => log::error!("failed to create project: {err}"),
            }
        });
    };

    view! {
        <form on:submit=handle_submit>
            <label>"title"</label>
            <input
                type="text"
                name="title"
                prop:value=move || draft.get().title
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.update(|d| d.apply(DraftAction::SetTitle(input.value())));
                }
            />

            <label>"description"</label>
            <input
                type="text"
                name="description"
                prop:value=move || draft.get().description
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.update(|d| d.apply(DraftAction::SetDescription(input.value())));
                }
            />

            <button type="submit">"Create Project"</button>
        </form>
    }
}
