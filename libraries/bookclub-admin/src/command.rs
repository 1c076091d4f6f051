//! Commands accepted by a running directory page task.

use bookclub_core::{AgeFilter, SearchField, StatusFilter};

/// State transitions a front end can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Raw search box edit; takes effect after the debounce interval
    SearchInput(String),
    /// Switch the column the search matches against
    SetSearchField(SearchField),
    /// Switch the account-status facet
    SetStatusFilter(StatusFilter),
    /// Switch the age-band facet
    SetAgeFilter(AgeFilter),
    /// Jump to a 1-based page, clamped to the known page range
    GoToPage(u32),
    /// Advance one page, if not on the last
    NextPage,
    /// Go back one page, if not on the first
    PrevPage,
    /// Clear both filters and the search box
    Reset,
    /// Stop the page task
    Shutdown,
}
