//! User listing operations against the admin API.

use crate::error::{ClientError, Result};
use crate::types::{ListUsersQuery, UserPage, UserPageDto};
use reqwest::Client;
use tracing::debug;

/// Users client for the Bookclub admin API.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// List users.
    ///
    /// `page` is zero-based on the wire. An empty keyword is not sent at
    /// all; the field selector accompanies the request whenever set.
    pub async fn list(&self, query: &ListUsersQuery) -> Result<UserPage> {
        let mut params = vec![
            format!("page={}", query.page),
            format!("size={}", query.size),
        ];
        if let Some(field) = query.search_field {
            params.push(format!("searchType={}", field.as_str()));
        }
        if let Some(keyword) = query.keyword.as_deref().filter(|k| !k.is_empty()) {
            params.push(format!("keyword={}", urlencoding::encode(keyword)));
        }

        let url = format!("{}/api/admin/users?{}", self.base_url, params.join("&"));
        debug!(url = %url, "Listing users");

        let mut request = self.http.get(&url);
        if let Some(token) = self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let dto: UserPageDto = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse user listing: {e}"))
            })?;

            let page = UserPage::try_from(dto)?;
            debug!(
                rows = page.content.len(),
                total_pages = page.total_pages,
                total_elements = page.total_elements,
                "Fetched user listing"
            );

            Ok(page)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
