//! Mutable state owned by the directory page task.

use bookclub_core::{AgeFilter, SearchField, StatusFilter, User};

/// User-editable query inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Raw search box contents
    pub search_input: String,
    /// Debounced copy of the search box; this is what requests carry
    pub search_term: String,
    /// Column the search matches against
    pub search_field: SearchField,
    /// Account-status facet
    pub status_filter: StatusFilter,
    /// Age-band facet
    pub age_filter: AgeFilter,
    /// Current page, 1-based
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            search_term: String::new(),
            search_field: SearchField::Nickname,
            status_filter: StatusFilter::All,
            age_filter: AgeFilter::All,
            page: 1,
        }
    }
}

impl QueryState {
    /// Whether any filter forces client-side filtering over a candidate pool.
    pub fn client_side_filtering(&self) -> bool {
        self.status_filter != StatusFilter::All || self.age_filter != AgeFilter::All
    }
}

/// Result of the last listing fetch.
#[derive(Debug, Clone)]
pub(crate) struct ListingState {
    pub rows: Vec<User>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub loading: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            // The first fetch is issued the moment the page task starts.
            loading: true,
        }
    }
}
