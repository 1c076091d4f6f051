//! Bookclub Core
//!
//! Domain types and pure logic shared across the Bookclub admin tools.
//!
//! This crate defines:
//! - **Domain Types**: `User`, `AgeBand`, pagination figures
//! - **Filters**: `StatusFilter`, `AgeFilter`, `SearchField` and their predicates
//! - **Statistics**: `DirectoryStats` computed over a fetched batch of users
//!
//! Everything here is synchronous and I/O-free; fetching lives in
//! `bookclub-server-client` and orchestration in `bookclub-admin`.

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod page;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use filter::{apply_filters, AgeFilter, SearchField, StatusFilter};
pub use page::{page_window, total_pages};
pub use stats::DirectoryStats;
pub use types::{AgeBand, User, UserId};
