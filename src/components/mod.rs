//! UI Components
//!
//! Leptos components for the projects views.

mod add_project;
mod navbar;
mod project_detail;
mod project_list;

pub use add_project::AddProject;
pub use navbar::Navbar;
pub use project_detail::ProjectDetail;
pub use project_list::ProjectList;
