//! Listing fetch planning and response handling.
//!
//! Two paging modes exist. With both filters at "all" the server does the
//! paging (one page of 10). With any filter engaged the server has no
//! matching predicate, so a capped candidate pool is fetched and filtered,
//! counted, and sliced locally. The pool cap mirrors the stats aggregator:
//! results beyond the first 10 000 records are invisible to filtering.

use bookclub_core::{apply_filters, page_window, User};
use bookclub_server_client::{ListUsersQuery, UserPage};

use crate::state::QueryState;

/// Rows shown per page of the directory table.
pub const PAGE_SIZE: u32 = 10;

/// Cap on the candidate pool fetched for client-side filtering and stats.
pub const CANDIDATE_POOL_SIZE: u32 = 10_000;

/// Build the listing request for the current query state.
pub(crate) fn plan_request(query: &QueryState) -> ListUsersQuery {
    let mut request = if query.client_side_filtering() {
        ListUsersQuery::new(0, CANDIDATE_POOL_SIZE)
    } else {
        ListUsersQuery::new(query.page.saturating_sub(1), PAGE_SIZE)
    };
    request.search_field = Some(query.search_field);
    if !query.search_term.is_empty() {
        request.keyword = Some(query.search_term.clone());
    }
    request
}

/// What a successful listing response does to the page state.
#[derive(Debug, Clone)]
pub(crate) struct ListingOutcome {
    pub rows: Vec<User>,
    pub total_pages: u32,
    pub total_elements: u64,
    /// Refreshed stats total, when the response covers the whole directory
    pub stats_total: Option<u64>,
}

/// Apply local filters and paging to a listing response.
pub(crate) fn apply_response(query: &QueryState, page: UserPage) -> ListingOutcome {
    let filtering = query.client_side_filtering();
    // Only an unfiltered, unsearched listing reflects the whole directory.
    let stats_total = (!filtering && query.search_term.is_empty()).then_some(page.total_elements);

    if filtering {
        let filtered = apply_filters(page.content, query.status_filter, query.age_filter);
        let total_elements = filtered.len() as u64;
        let total_pages = bookclub_core::total_pages(total_elements, PAGE_SIZE);
        let rows = page_window(&filtered, query.page, PAGE_SIZE).to_vec();
        ListingOutcome {
            rows,
            total_pages,
            total_elements,
            stats_total,
        }
    } else {
        ListingOutcome {
            rows: page.content,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            stats_total,
        }
    }
}
