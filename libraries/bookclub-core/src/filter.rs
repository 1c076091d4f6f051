//! Filter vocabulary for the member directory
//!
//! Status and age filters are applied client-side over a fetched batch;
//! the search field selector is forwarded to the server.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{AgeBand, User};

/// Which column the server-side search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Nickname,
    Email,
}

impl SearchField {
    /// Wire value understood by the listing API (`searchType` parameter).
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Nickname => "name",
            SearchField::Email => "email",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SearchField::Nickname),
            "email" => Ok(SearchField::Email),
            other => Err(CoreError::UnknownSearchField(other.to_string())),
        }
    }
}

/// Account-status facet of the directory filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Dormant,
}

impl StatusFilter {
    /// Whether `user` passes this filter.
    pub fn matches(self, user: &User) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => user.is_active(),
            StatusFilter::Dormant => !user.is_active(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Dormant => "dormant",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "dormant" => Ok(StatusFilter::Dormant),
            other => Err(CoreError::UnknownStatusFilter(other.to_string())),
        }
    }
}

/// Age-band facet of the directory filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeFilter {
    #[default]
    All,
    Band(AgeBand),
}

impl AgeFilter {
    /// Whether `user` passes this filter.
    pub fn matches(self, user: &User) -> bool {
        match self {
            AgeFilter::All => true,
            AgeFilter::Band(band) => user.age_band == band,
        }
    }
}

impl fmt::Display for AgeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeFilter::All => f.write_str("all"),
            AgeFilter::Band(band) => band.fmt(f),
        }
    }
}

impl FromStr for AgeFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(AgeFilter::All)
        } else {
            s.parse::<AgeBand>().map(AgeFilter::Band)
        }
    }
}

/// Apply the status filter, then the age filter, keeping input order.
pub fn apply_filters(users: Vec<User>, status: StatusFilter, age: AgeFilter) -> Vec<User> {
    let mut users = users;
    users.retain(|u| status.matches(u) && age.matches(u));
    users
}
