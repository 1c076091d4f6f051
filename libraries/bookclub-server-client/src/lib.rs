//! Bookclub Server Client
//!
//! HTTP client library for the Bookclub admin API.
//!
//! # Features
//!
//! - **Connection probe**: server name/version via `/api/info`
//! - **User listing**: paged, searchable member listing via `/api/admin/users`
//!
//! # Example
//!
//! ```ignore
//! use bookclub_server_client::{BookclubClient, ListUsersQuery, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("https://bookclub.example.com");
//!     let client = BookclubClient::new(config)?;
//!
//!     let info = client.test_connection().await?;
//!     println!("Connected to {} v{}", info.name, info.version);
//!
//!     let page = client.users().list(&ListUsersQuery::new(0, 10)).await?;
//!     println!("{} members in total", page.total_elements);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use client::BookclubClient;
pub use error::{ClientError, Result};
pub use types::{ListUsersQuery, ServerConfig, ServerInfo, UserPage};
pub use users::UsersClient;
