//! Types for Bookclub admin API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookclub_core::{AgeBand, SearchField, User, UserId};

use crate::error::ClientError;

/// Configuration for connecting to a Bookclub server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "https://bookclub.example.com")
    pub url: String,
    /// Bearer token for admin endpoints, if one has been issued
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config carrying an existing access token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

/// Parameters for the user listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersQuery {
    /// Zero-based page index
    pub page: u32,
    /// Maximum records per page
    pub size: u32,
    /// Column the keyword matches against (`searchType`)
    pub search_field: Option<SearchField>,
    /// Free-text search term; empty terms are not sent
    pub keyword: Option<String>,
}

impl ListUsersQuery {
    /// A plain page request with no search.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search_field: None,
            keyword: None,
        }
    }

    /// Attach a search field and keyword.
    pub fn with_search(mut self, field: SearchField, keyword: impl Into<String>) -> Self {
        self.search_field = Some(field);
        self.keyword = Some(keyword.into());
        self
    }
}

/// One page of the user listing, mapped to domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    /// Records on this page, in server order
    pub content: Vec<User>,
    /// Server-reported page count
    pub total_pages: u32,
    /// Server-reported total element count
    pub total_elements: u64,
}

/// Information about the Bookclub server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

// =============================================================================
// Wire DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub nickname: String,
    pub email: String,
    pub age_group: String,
    pub post_count: u32,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserDto> for User {
    type Error = ClientError;

    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        let age_band: AgeBand = dto
            .age_group
            .parse()
            .map_err(|e| ClientError::Parse(format!("user {}: {e}", dto.id)))?;
        Ok(User {
            id: dto.id,
            created_at: dto.created_at,
            nickname: dto.nickname,
            email: dto.email,
            age_band,
            post_count: dto.post_count,
            last_active: dto.last_active,
            deleted_at: dto.deleted_at,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPageDto {
    pub content: Vec<UserDto>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl TryFrom<UserPageDto> for UserPage {
    type Error = ClientError;

    fn try_from(dto: UserPageDto) -> Result<Self, Self::Error> {
        let content = dto
            .content
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(UserPage {
            content,
            total_pages: dto.total_pages,
            total_elements: dto.total_elements,
        })
    }
}
