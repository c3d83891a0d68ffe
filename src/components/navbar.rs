//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Static top navigation with a single link to the project list
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="nav-style">
            <ul>
                <li>
                    <A href="/projects">"Projects"</A>
                </li>
            </ul>
        </nav>
    }
}
