//! Main Bookclub admin API client.

use crate::error::{ClientError, Result};
use crate::types::{ServerConfig, ServerInfo};
use crate::users::UsersClient;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for a Bookclub server's admin API.
///
/// # Example
///
/// ```ignore
/// use bookclub_server_client::{BookclubClient, ServerConfig};
///
/// let config = ServerConfig::new("https://bookclub.example.com");
/// let client = BookclubClient::new(config)?;
///
/// let info = client.test_connection().await?;
/// println!("Connected to {} v{}", info.name, info.version);
///
/// let page = client.users().list(&ListUsersQuery::new(0, 10)).await?;
/// println!("{} members", page.total_elements);
/// ```
#[derive(Debug, Clone)]
pub struct BookclubClient {
    http: Client,
    config: ServerConfig,
}

impl BookclubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServerConfig {
            url,
            access_token: config.access_token,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("BookclubAdmin/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Test the connection to the server.
    ///
    /// This does not require authentication.
    pub async fn test_connection(&self) -> Result<ServerInfo> {
        let url = format!("{}/api/info", self.config.url);
        debug!(url = %url, "Testing server connection");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let info: ServerInfo = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse server info: {e}"))
            })?;

            info!(name = %info.name, version = %info.version, "Connected to server");

            Ok(info)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a users client for listing operations.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(
            &self.http,
            &self.config.url,
            self.config.access_token.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(BookclubClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(BookclubClient::new(ServerConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(BookclubClient::new(ServerConfig::new("")).is_err());
        assert!(BookclubClient::new(ServerConfig::new("not-a-url")).is_err());
        assert!(BookclubClient::new(ServerConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            BookclubClient::new(ServerConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.url(), "https://example.com");
    }
}
