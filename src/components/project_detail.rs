//! Project Detail Component
//!
//! Placeholder view for a single project route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="project-detail">
            <h3>"Project " {id}</h3>
        </div>
    }
}
