//! List state for the projects page
//!
//! The record vector is the single source of truth; everything shown on
//! the page derives from it through the filters.

use contracts::domain::common::{PendingDelete, RecordId};
use contracts::domain::project::{
    filter_projects, next_project_id, remove_project, upsert_project, Project, ProjectDraft,
    ProjectFilters,
};
use leptos::prelude::*;

use crate::shared::data::fixtures::seed_projects;

#[derive(Clone, Copy)]
pub struct ProjectListState {
    pub projects: RwSignal<Vec<Project>>,
    pub filters: RwSignal<ProjectFilters>,
    pub show_filter_panel: RwSignal<bool>,
    pub pending_delete: RwSignal<PendingDelete>,
}

impl ProjectListState {
    pub fn new() -> Self {
        Self {
            projects: RwSignal::new(seed_projects()),
            filters: RwSignal::new(ProjectFilters::default()),
            show_filter_panel: RwSignal::new(false),
            pending_delete: RwSignal::new(PendingDelete::default()),
        }
    }

    pub fn filtered(&self) -> Vec<Project> {
        filter_projects(&self.projects.get(), &self.filters.get())
    }

    pub fn next_id(&self) -> RecordId {
        next_project_id(&self.projects.get_untracked())
    }

    /// Create or update, depending on whether the id is already present.
    pub fn save(&self, record: Project) {
        self.projects.update(|list| upsert_project(list, record));
    }

    pub fn request_delete(&self, id: RecordId) {
        self.pending_delete.update(|p| p.request(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.update(|p| p.cancel());
    }

    /// Removes the pending record. Returns its id, or None when nothing
    /// was pending (a second confirm is a no-op).
    pub fn confirm_delete(&self) -> Option<RecordId> {
        let mut pending = self.pending_delete.get_untracked();
        let id = pending.confirm();
        self.pending_delete.set(pending);
        if let Some(id) = id {
            self.projects.update(|list| remove_project(list, id));
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_new_record_appends() {
        let state = ProjectListState::new();
        let id = state.next_id();
        assert_eq!(id, 4);

        // An untouched draft has an empty title; it is saved as-is.
        state.save(ProjectDraft::new().into_project(id));
        let saved = state.projects.get_untracked();
        assert_eq!(saved.len(), 4);
        assert_eq!(saved[3].title, "");
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let state = ProjectListState::new();
        state.request_delete(2);
        assert_eq!(state.projects.get_untracked().len(), 3);

        assert_eq!(state.confirm_delete(), Some(2));
        assert_eq!(state.projects.get_untracked().len(), 2);
        assert!(state
            .projects
            .get_untracked()
            .iter()
            .all(|p| p.id != 2));

        // nothing pending anymore
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.projects.get_untracked().len(), 2);
    }

    #[test]
    fn test_cancel_clears_pending_slot() {
        let state = ProjectListState::new();
        state.request_delete(1);
        state.cancel_delete();
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.projects.get_untracked().len(), 3);
    }

    #[test]
    fn test_dialog_teardown_clears_pending_marker() {
        let state = ProjectListState::new();
        state.request_delete(1);
        assert_eq!(state.pending_delete.get_untracked().pending(), Some(1));

        // Escape or an overlay click tears the dialog down without
        // touching the buttons; teardown cancels the request.
        state.cancel_delete();
        assert_eq!(state.pending_delete.get_untracked().pending(), None);
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.projects.get_untracked().len(), 3);

        // Teardown after a confirmed delete finds the slot empty.
        state.request_delete(2);
        assert_eq!(state.confirm_delete(), Some(2));
        state.cancel_delete();
        assert_eq!(state.pending_delete.get_untracked().pending(), None);
    }

    #[test]
    fn test_second_request_overwrites_first() {
        let state = ProjectListState::new();
        state.request_delete(1);
        state.request_delete(3);
        assert_eq!(state.confirm_delete(), Some(3));
        assert!(state.projects.get_untracked().iter().any(|p| p.id == 1));
    }

    #[test]
    fn test_filtered_tracks_filters() {
        let state = ProjectListState::new();
        assert_eq!(state.filtered().len(), 3);

        state.filters.update(|f| f.search = "climate".to_string());
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }
}
