//! Component State Reducers
//!
//! Each component owns one state struct with a single update entry
//! point, so every transition is explicit and testable without
//! rendering anything.

use crate::models::Project;

/// State behind the project list view.
///
/// Holds the most recent successful fetch result, or nothing before
/// the first fetch completes. A failed fetch applies no action and
/// leaves the previous sequence in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub projects: Vec<Project>,
}

/// Transitions of the list view
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    /// Replace the whole sequence with a fresh fetch result.
    /// Racing refreshes each apply this in full; the last one wins.
    Replace(Vec<Project>),
}

impl ListState {
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Replace(projects) => self.projects = projects,
        }
    }
}

/// Draft owned by the creation form, mutated on every keystroke
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftState {
    pub title: String,
    pub description: String,
}

/// Transitions of the creation form
#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    SetTitle(String),
    SetDescription(String),
    /// Reset both fields after a create request succeeds
    Clear,
}

impl DraftState {
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SetTitle(title) => self.title = title,
            DraftAction::SetDescription(description) => self.description = description,
            DraftAction::Clear => {
                self.title.clear();
                self.description.clear();
            }
        }
    }
}
