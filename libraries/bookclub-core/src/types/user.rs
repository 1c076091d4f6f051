//! User account domain type
//!
//! Records are owned by the remote admin API; this side only reads them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub type UserId = i64;

/// How far back "recently active" reaches, in days.
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Coarse age bracket attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "10s")]
    Teens,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50+")]
    FiftyPlus,
}

impl AgeBand {
    /// All bands, in display order.
    pub const ALL: [AgeBand; 5] = [
        AgeBand::Teens,
        AgeBand::Twenties,
        AgeBand::Thirties,
        AgeBand::Forties,
        AgeBand::FiftyPlus,
    ];

    /// Wire/display label for this band.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeBand::Teens => "10s",
            AgeBand::Twenties => "20s",
            AgeBand::Thirties => "30s",
            AgeBand::Forties => "40s",
            AgeBand::FiftyPlus => "50+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10s" => Ok(AgeBand::Teens),
            "20s" => Ok(AgeBand::Twenties),
            "30s" => Ok(AgeBand::Thirties),
            "40s" => Ok(AgeBand::Forties),
            "50+" => Ok(AgeBand::FiftyPlus),
            other => Err(CoreError::UnknownAgeBand(other.to_string())),
        }
    }
}

/// A member account as reported by the admin listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Display name
    pub nickname: String,

    /// Email address
    pub email: String,

    /// Age bracket
    pub age_band: AgeBand,

    /// Number of posts authored
    pub post_count: u32,

    /// Last recorded activity, if any
    pub last_active: Option<DateTime<Utc>>,

    /// Set when the account has been deactivated
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// An account is active iff it carries no deletion timestamp.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// An account is recently active iff its last activity falls within
    /// the trailing [`RECENT_ACTIVITY_WINDOW_DAYS`] of `now`.
    pub fn is_recently_active(&self, now: DateTime<Utc>) -> bool {
        match self.last_active {
            Some(last) => last >= now - Duration::days(RECENT_ACTIVITY_WINDOW_DAYS),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(deleted: bool, last_active_days_ago: Option<i64>) -> User {
        let now = Utc::now();
        User {
            id: 1,
            created_at: now - Duration::days(100),
            nickname: "reader".to_string(),
            email: "reader@example.com".to_string(),
            age_band: AgeBand::Twenties,
            post_count: 3,
            last_active: last_active_days_ago.map(|d| now - Duration::days(d)),
            deleted_at: deleted.then(|| now - Duration::days(1)),
        }
    }

    #[test]
    fn active_iff_no_deletion_timestamp() {
        assert!(user(false, None).is_active());
        assert!(!user(true, None).is_active());
    }

    #[test]
    fn recently_active_within_seven_days() {
        let now = Utc::now();
        assert!(user(false, Some(3)).is_recently_active(now));
        assert!(!user(false, Some(8)).is_recently_active(now));
        assert!(!user(false, None).is_recently_active(now));
    }

    #[test]
    fn age_band_labels_round_trip() {
        for band in AgeBand::ALL {
            assert_eq!(band.as_str().parse::<AgeBand>().unwrap(), band);
        }
        assert!("60s".parse::<AgeBand>().is_err());
    }

    #[test]
    fn age_band_serializes_to_wire_label() {
        let json = serde_json::to_string(&AgeBand::FiftyPlus).unwrap();
        assert_eq!(json, "\"50+\"");
    }
}
