//! Machinery shared by the project and partner collections.

/// Identifier of a record in an in-memory collection.
pub type RecordId = i64;

/// Sentinel meaning "no constraint" in a filter dimension.
pub const FILTER_ALL: &str = "All";

/// Next identifier for a collection: one past the current maximum.
///
/// Ids of deleted records may be reused later; callers that need the
/// create-then-delete round trip to restore the original collection
/// rely on exactly this behavior.
pub fn next_record_id(ids: impl IntoIterator<Item = RecordId>) -> RecordId {
    ids.into_iter().max().unwrap_or(0) + 1
}

/// Case-insensitive substring match used by every search box.
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Does `selected` constrain a filter dimension, or is it the "All" sentinel?
///
/// The status tab strip uses lowercase keys ("all"), the filter panel
/// selects use display values ("All"); both spellings mean unconstrained.
pub fn dimension_matches(selected: &str, value: &str) -> bool {
    selected.eq_ignore_ascii_case(FILTER_ALL) || selected == value
}

/// Single-slot marker for a two-step delete confirmation.
///
/// Requesting a delete for another record overwrites the slot; there is
/// never more than one pending request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDelete {
    pending: Option<RecordId>,
}

impl PendingDelete {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn request(&mut self, id: RecordId) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<RecordId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending id for execution. Returns `None` (a no-op for the
    /// caller) when nothing was requested.
    pub fn confirm(&mut self) -> Option<RecordId> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_record_id_empty() {
        assert_eq!(next_record_id([]), 1);
    }

    #[test]
    fn test_next_record_id_max_plus_one() {
        assert_eq!(next_record_id([1, 2, 3]), 4);
        // Gaps below the maximum are not reused
        assert_eq!(next_record_id([1, 7, 3]), 8);
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        assert!(matches_search("Makerere University", "MAKERERE"));
        assert!(matches_search("Makerere University", "vers"));
        assert!(matches_search("anything", ""));
        assert!(!matches_search("Makerere University", "Nairobi"));
    }

    #[test]
    fn test_dimension_matches_all_sentinel() {
        assert!(dimension_matches("All", "Research"));
        assert!(dimension_matches("all", "Research"));
        assert!(dimension_matches("Research", "Research"));
        assert!(!dimension_matches("Training", "Research"));
    }

    #[test]
    fn test_pending_delete_single_slot() {
        let mut pending = PendingDelete::none();
        assert_eq!(pending.confirm(), None);

        pending.request(2);
        pending.request(5);
        assert_eq!(pending.pending(), Some(5));

        assert_eq!(pending.confirm(), Some(5));
        assert_eq!(pending.confirm(), None);
    }

    #[test]
    fn test_pending_delete_cancel_clears() {
        let mut pending = PendingDelete::none();
        pending.request(3);
        pending.cancel();
        assert!(!pending.is_pending());
        assert_eq!(pending.confirm(), None);
    }
}
