//! View model published by the page task.
//!
//! A pure projection of the page state; no behavior. Front ends (the
//! console, a future GUI) render this without touching domain types.

use std::fmt;

use bookclub_core::{DirectoryStats, User, UserId};

use crate::state::{ListingState, QueryState};

/// Summary counts for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsView {
    pub total: u64,
    pub active: u64,
    pub recent: u64,
}

/// Status badge shown on each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Active,
    Dormant,
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBadge::Active => f.write_str("active"),
            StatusBadge::Dormant => f.write_str("dormant"),
        }
    }
}

/// One rendered table row.
///
/// Column order matches the directory table: joined date, nickname,
/// email, age band, post count, last active, status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub joined: String,
    pub nickname: String,
    pub email: String,
    pub age_band: String,
    pub post_count: u32,
    pub last_active: String,
    pub status: StatusBadge,
}

impl UserRow {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            joined: user.created_at.format("%Y-%m-%d").to_string(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            age_band: user.age_band.to_string(),
            post_count: user.post_count,
            last_active: user
                .last_active
                .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
            status: if user.is_active() {
                StatusBadge::Active
            } else {
                StatusBadge::Dormant
            },
        }
    }
}

/// Pager line state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    /// Current page, 1-based
    pub current: u32,
    /// Displayed page count; never shown as zero
    pub total: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Everything a front end needs to draw the directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub stats: StatsView,
    pub rows: Vec<UserRow>,
    pub loading: bool,
    pub pager: PagerView,
    /// Total elements behind the current listing (filtered count when a
    /// client-side filter is engaged, server-reported count otherwise)
    pub total_elements: u64,
    /// Echo of the query inputs this view was rendered from
    pub query: QueryState,
}

impl PageView {
    /// Whether the table should show its "no data" marker.
    pub fn empty_state(&self) -> bool {
        self.rows.is_empty() && !self.loading
    }
}

pub(crate) fn render(query: &QueryState, listing: &ListingState, stats: &DirectoryStats) -> PageView {
    let pager = PagerView {
        current: query.page,
        total: listing.total_pages.max(1),
        prev_enabled: !(query.page == 1 || listing.loading),
        next_enabled: !(query.page == listing.total_pages
            || listing.total_pages == 0
            || listing.loading),
    };

    PageView {
        stats: StatsView {
            total: stats.total,
            active: stats.active,
            recent: stats.recent,
        },
        rows: listing.rows.iter().map(UserRow::from_user).collect(),
        loading: listing.loading,
        pager,
        total_elements: listing.total_elements,
        query: query.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookclub_core::AgeBand;
    use chrono::{TimeZone, Utc};

    fn listing(total_pages: u32, loading: bool) -> ListingState {
        ListingState {
            rows: Vec::new(),
            total_pages,
            total_elements: u64::from(total_pages) * 10,
            loading,
        }
    }

    fn render_pager(page: u32, total_pages: u32, loading: bool) -> PagerView {
        let query = QueryState {
            page,
            ..QueryState::default()
        };
        render(&query, &listing(total_pages, loading), &DirectoryStats::default()).pager
    }

    #[test]
    fn prev_disabled_on_first_page_or_while_loading() {
        assert!(!render_pager(1, 5, false).prev_enabled);
        assert!(render_pager(2, 5, false).prev_enabled);
        assert!(!render_pager(2, 5, true).prev_enabled);
    }

    #[test]
    fn next_disabled_on_last_page_zero_pages_or_loading() {
        assert!(!render_pager(5, 5, false).next_enabled);
        assert!(!render_pager(1, 0, false).next_enabled);
        assert!(!render_pager(1, 5, true).next_enabled);
        assert!(render_pager(1, 5, false).next_enabled);
    }

    #[test]
    fn zero_total_pages_displays_as_one() {
        assert_eq!(render_pager(1, 0, false).total, 1);
        assert_eq!(render_pager(1, 3, false).total, 3);
    }

    #[test]
    fn row_formats_timestamps_and_badge() {
        let user = User {
            id: 3,
            created_at: Utc.with_ymd_and_hms(2025, 12, 24, 10, 30, 0).unwrap(),
            nickname: "nabi".to_string(),
            email: "nabi@example.com".to_string(),
            age_band: AgeBand::Forties,
            post_count: 17,
            last_active: Some(Utc.with_ymd_and_hms(2026, 2, 1, 8, 5, 0).unwrap()),
            deleted_at: None,
        };
        let row = UserRow::from_user(&user);
        assert_eq!(row.joined, "2025-12-24");
        assert_eq!(row.last_active, "2026-02-01 08:05");
        assert_eq!(row.age_band, "40s");
        assert_eq!(row.status, StatusBadge::Active);

        let dormant = User {
            deleted_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            last_active: None,
            ..user
        };
        let row = UserRow::from_user(&dormant);
        assert_eq!(row.last_active, "-");
        assert_eq!(row.status, StatusBadge::Dormant);
    }

    #[test]
    fn empty_state_requires_not_loading() {
        let query = QueryState::default();
        let view = render(&query, &listing(0, true), &DirectoryStats::default());
        assert!(!view.empty_state());
        let view = render(&query, &listing(0, false), &DirectoryStats::default());
        assert!(view.empty_state());
    }
}
