//! Directory summary statistics.
//!
//! The listing API has no aggregation endpoint, so active/recent counts
//! are derived client-side from a fetched batch. The batch is capped (the
//! fetcher requests at most 10 000 records), so those two counts are a
//! lower bound on very large directories; `total` comes from the
//! server-reported element count and is exact.

use chrono::{DateTime, Utc};

use crate::types::User;

/// Summary counts shown on the directory's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    /// Server-reported total number of accounts
    pub total: u64,
    /// Accounts without a deletion timestamp, within the fetched batch
    pub active: u64,
    /// Accounts active in the last 7 days, within the fetched batch
    pub recent: u64,
}

impl DirectoryStats {
    /// Compute stats over a fetched batch, evaluated at `now`.
    pub fn compute(total: u64, users: &[User], now: DateTime<Utc>) -> Self {
        let active = users.iter().filter(|u| u.is_active()).count() as u64;
        let recent = users.iter().filter(|u| u.is_recently_active(now)).count() as u64;
        Self {
            total,
            active,
            recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgeBand;
    use chrono::Duration;

    fn user(id: i64, deleted: bool, last_active_days_ago: Option<i64>, now: DateTime<Utc>) -> User {
        User {
            id,
            created_at: now - Duration::days(60),
            nickname: format!("u{id}"),
            email: format!("u{id}@example.com"),
            age_band: AgeBand::Thirties,
            post_count: 1,
            last_active: last_active_days_ago.map(|d| now - Duration::days(d)),
            deleted_at: deleted.then(|| now - Duration::days(2)),
        }
    }

    #[test]
    fn counts_match_invariants() {
        let now = Utc::now();
        let batch = vec![
            user(1, false, Some(1), now),  // active + recent
            user(2, false, Some(10), now), // active only
            user(3, true, Some(2), now),   // dormant but recent
            user(4, true, None, now),      // dormant, never active
            user(5, false, None, now),     // active, never active
        ];

        let stats = DirectoryStats::compute(250, &batch, now);
        assert_eq!(stats.total, 250);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.recent, 2);
    }

    #[test]
    fn exactly_seven_days_counts_as_recent() {
        let now = Utc::now();
        let batch = vec![user(1, false, Some(7), now)];
        let stats = DirectoryStats::compute(1, &batch, now);
        assert_eq!(stats.recent, 1);
    }

    #[test]
    fn empty_batch_keeps_zero_defaults() {
        let stats = DirectoryStats::compute(0, &[], Utc::now());
        assert_eq!(stats, DirectoryStats::default());
    }
}
