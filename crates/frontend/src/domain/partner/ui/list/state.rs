//! List state for the partners page

use contracts::domain::common::{PendingDelete, RecordId};
use contracts::domain::partner::{
    filter_partners, next_partner_id, remove_partner, upsert_partner, Partner, PartnerFilters,
};
use leptos::prelude::*;

use crate::shared::data::fixtures::seed_partners;

#[derive(Clone, Copy)]
pub struct PartnerListState {
    pub partners: RwSignal<Vec<Partner>>,
    pub filters: RwSignal<PartnerFilters>,
    pub pending_delete: RwSignal<PendingDelete>,
}

impl PartnerListState {
    pub fn new() -> Self {
        Self {
            partners: RwSignal::new(seed_partners()),
            filters: RwSignal::new(PartnerFilters::default()),
            pending_delete: RwSignal::new(PendingDelete::default()),
        }
    }

    pub fn filtered(&self) -> Vec<Partner> {
        filter_partners(&self.partners.get(), &self.filters.get())
    }

    pub fn next_id(&self) -> RecordId {
        next_partner_id(&self.partners.get_untracked())
    }

    pub fn save(&self, record: Partner) {
        self.partners.update(|list| upsert_partner(list, record));
    }

    pub fn find(&self, id: RecordId) -> Option<Partner> {
        self.partners
            .get_untracked()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn request_delete(&self, id: RecordId) {
        self.pending_delete.update(|p| p.request(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.update(|p| p.cancel());
    }

    pub fn confirm_delete(&self) -> Option<RecordId> {
        let mut pending = self.pending_delete.get_untracked();
        let id = pending.confirm();
        self.pending_delete.set(pending);
        if let Some(id) = id {
            self.partners.update(|list| remove_partner(list, id));
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::partner::PartnerDraft;

    #[test]
    fn test_create_appends_with_next_id() {
        let state = PartnerListState::new();
        let id = state.next_id();
        assert_eq!(id, 4);

        let draft = PartnerDraft {
            name: "New Org".to_string(),
            partner_type: "NGO".to_string(),
            ..Default::default()
        };
        state.save(draft.into_new_partner(id));
        assert_eq!(state.partners.get_untracked().len(), 4);
        assert_eq!(state.find(4).map(|p| p.projects), Some(0));
    }

    #[test]
    fn test_delete_flow() {
        let state = PartnerListState::new();
        state.request_delete(1);
        assert_eq!(state.partners.get_untracked().len(), 3);

        assert_eq!(state.confirm_delete(), Some(1));
        assert!(state.find(1).is_none());
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn test_dialog_teardown_clears_pending_marker() {
        let state = PartnerListState::new();
        state.request_delete(2);
        assert_eq!(state.pending_delete.get_untracked().pending(), Some(2));

        // Escape or an overlay click tears the dialog down without
        // touching the buttons; teardown cancels the request.
        state.cancel_delete();
        assert_eq!(state.pending_delete.get_untracked().pending(), None);
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.partners.get_untracked().len(), 3);
    }

    #[test]
    fn test_type_filter() {
        let state = PartnerListState::new();
        state
            .filters
            .update(|f| f.partner_type = "Research Center".to_string());
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }
}
