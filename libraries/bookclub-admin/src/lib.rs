//! Bookclub Admin Page Engine
//!
//! Headless implementation of the member-directory admin page: it owns the
//! search/filter/pagination state, debounces search input, fetches listings
//! from the remote admin API, aggregates directory statistics, and publishes
//! renderable view snapshots.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookclub_admin::{DirectoryPage, PageCommand};
//! use bookclub_core::StatusFilter;
//! use bookclub_server_client::{BookclubClient, ServerConfig};
//!
//! let client = Arc::new(BookclubClient::new(ServerConfig::new("https://bookclub.example.com"))?);
//! let page = DirectoryPage::spawn(client);
//!
//! page.send(PageCommand::SetStatusFilter(StatusFilter::Dormant)).await?;
//! let view = page.wait_for(|v| !v.loading).await?;
//! for row in &view.rows {
//!     println!("{} <{}> {}", row.nickname, row.email, row.status);
//! }
//! ```

#![forbid(unsafe_code)]

mod command;
mod listing;
mod page;
mod state;
mod view;

pub use command::PageCommand;
pub use listing::{CANDIDATE_POOL_SIZE, PAGE_SIZE};
pub use page::{DirectoryPage, PageClosed, PageHandle, SEARCH_DEBOUNCE};
pub use state::QueryState;
pub use view::{PageView, PagerView, StatsView, StatusBadge, UserRow};
