//! Project List Component
//!
//! Fetches the project collection on first display, renders one link
//! per record, and embeds the creation form with a refresh callback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::AddProject;
use crate::state::{ListAction, ListState};

#[component]
pub fn ProjectList() -> impl IntoView {
    let client = ApiClient::default();
    let (list, set_list) = signal(ListState::default());

    // Replaces the displayed sequence on success; a failed fetch is
    // logged and leaves the previous sequence (or emptiness) as-is.
    let refresh = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                match client.list_projects().await {
                    Ok(projects) => {
                        set_list.update(|s| s.apply(ListAction::Replace(projects)));
                    }
                    Err(err) => log::error!("failed to load projects: {err}"),
                }
            });
        }
    };

    // Initial load on mount
    {
        let refresh = refresh.clone();
        Effect::new(move |_| refresh());
    }

    let on_created = Callback::new({
        let refresh = refresh.clone();
        move |_: ()| refresh()
    });

    view! {
        <div id="project-list">
            <AddProject client=client on_created=on_created />

            <div>
                {move || list.get().projects.into_iter().map(|project| {
                    let href = format!("/projects/{}", project.id);
                    view! {
                        <div class="project">
                            <A href=href>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                            </A>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
