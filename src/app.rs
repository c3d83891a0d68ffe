//! Application Root
//!
//! Maps the two project routes and renders the navbar above the
//! routed region.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Navbar, ProjectDetail, ProjectList};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Navbar />
                <Routes fallback=|| "Not found.".into_view()>
                    <Route path=path!("/projects") view=ProjectList />
                    <Route path=path!("/projects/:id") view=ProjectDetail />
                </Routes>
            </div>
        </Router>
    }
}
