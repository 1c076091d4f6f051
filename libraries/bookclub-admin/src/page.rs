//! The directory page task.
//!
//! All mutable page state lives inside one spawned task; commands, the
//! debounce timer, and fetch completions are its only inputs, so state
//! transitions never interleave. Fetches run as separate tasks and report
//! back over a channel, each stamped with a sequence number; a completion
//! that is not the latest issued is discarded, so a slow stale response
//! can never overwrite a newer one.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep, Sleep};
use tracing::{debug, warn};

use bookclub_core::{AgeFilter, DirectoryStats, StatusFilter};
use bookclub_server_client::{BookclubClient, ClientError, ListUsersQuery, UserPage};

use crate::command::PageCommand;
use crate::listing::{self, CANDIDATE_POOL_SIZE};
use crate::state::{ListingState, QueryState};
use crate::view::{render, PageView};

/// Quiet interval before a search edit becomes the effective term.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

const COMMAND_BUFFER: usize = 32;

/// The page task has shut down and can no longer be driven.
#[derive(Debug, Error)]
#[error("directory page task has shut down")]
pub struct PageClosed;

/// The member-directory page.
pub struct DirectoryPage;

impl DirectoryPage {
    /// Spawn the page task against `client`.
    ///
    /// The returned handle sends commands and observes view snapshots.
    /// The task stops on [`PageCommand::Shutdown`] or when every handle
    /// has been dropped.
    pub fn spawn(client: Arc<BookclubClient>) -> PageHandle {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let (fetch_tx, fetch_rx) = mpsc::channel(COMMAND_BUFFER);

        let query = QueryState::default();
        let listing = ListingState::default();
        let stats = DirectoryStats::default();
        let (view_tx, view_rx) = watch::channel(render(&query, &listing, &stats));

        let task = PageTask {
            client,
            query,
            listing,
            stats,
            seq: 0,
            fetch_tx,
            view_tx,
        };
        tokio::spawn(task.run(commands_rx, fetch_rx));

        PageHandle {
            commands: commands_tx,
            views: view_rx,
        }
    }
}

/// Handle to a running directory page task.
#[derive(Debug, Clone)]
pub struct PageHandle {
    commands: mpsc::Sender<PageCommand>,
    views: watch::Receiver<PageView>,
}

impl PageHandle {
    /// Send a command to the page task.
    pub async fn send(&self, command: PageCommand) -> Result<(), PageClosed> {
        self.commands.send(command).await.map_err(|_| PageClosed)
    }

    /// Latest published view.
    pub fn view(&self) -> PageView {
        self.views.borrow().clone()
    }

    /// Subscribe to view snapshots.
    pub fn views(&self) -> watch::Receiver<PageView> {
        self.views.clone()
    }

    /// Wait until a published view satisfies `pred`, returning it.
    pub async fn wait_for<F>(&self, pred: F) -> Result<PageView, PageClosed>
    where
        F: FnMut(&PageView) -> bool,
    {
        let mut views = self.views.clone();
        let view = views.wait_for(pred).await.map_err(|_| PageClosed)?;
        Ok(view.clone())
    }
}

enum FetchMessage {
    Listing {
        seq: u64,
        result: Result<UserPage, ClientError>,
    },
    Stats {
        result: Result<UserPage, ClientError>,
    },
}

struct PageTask {
    client: Arc<BookclubClient>,
    query: QueryState,
    listing: ListingState,
    stats: DirectoryStats,
    /// Sequence number of the most recently dispatched listing fetch
    seq: u64,
    fetch_tx: mpsc::Sender<FetchMessage>,
    view_tx: watch::Sender<PageView>,
}

impl PageTask {
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<PageCommand>,
        mut fetches: mpsc::Receiver<FetchMessage>,
    ) {
        let mut debounce: Option<Pin<Box<Sleep>>> = None;

        // The page mounts fetching: stats once, plus the initial listing.
        self.spawn_stats_fetch();
        self.dispatch_listing();
        self.publish();

        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    None | Some(PageCommand::Shutdown) => break,
                    Some(PageCommand::SearchInput(text)) => {
                        if text != self.query.search_input {
                            self.query.search_input = text;
                            debounce = Some(Box::pin(sleep(SEARCH_DEBOUNCE)));
                        }
                    }
                    Some(PageCommand::Reset) => {
                        self.reset_filters();
                        if !self.query.search_input.is_empty() {
                            self.query.search_input.clear();
                            // The debounced term follows on its own schedule,
                            // exactly as a manual clearing would.
                            debounce = Some(Box::pin(sleep(SEARCH_DEBOUNCE)));
                        }
                    }
                    Some(cmd) => self.handle_command(cmd),
                },
                Some(msg) = fetches.recv() => self.handle_fetch(msg),
                () = poll_debounce(&mut debounce) => {
                    debounce = None;
                    self.commit_search_term();
                }
            }
            self.publish();
        }

        debug!("Directory page task stopped");
    }

    fn handle_command(&mut self, cmd: PageCommand) {
        match cmd {
            PageCommand::SetSearchField(field) => {
                if self.query.search_field != field {
                    self.query.search_field = field;
                    self.query.page = 1;
                    self.dispatch_listing();
                }
            }
            PageCommand::SetStatusFilter(status) => {
                if self.query.status_filter != status {
                    self.query.status_filter = status;
                    self.query.page = 1;
                    self.dispatch_listing();
                }
            }
            PageCommand::SetAgeFilter(age) => {
                if self.query.age_filter != age {
                    self.query.age_filter = age;
                    self.query.page = 1;
                    self.dispatch_listing();
                }
            }
            PageCommand::GoToPage(page) => {
                let page = page.clamp(1, self.listing.total_pages.max(1));
                if page != self.query.page {
                    self.query.page = page;
                    self.dispatch_listing();
                }
            }
            PageCommand::NextPage => {
                if self.query.page < self.listing.total_pages {
                    self.query.page += 1;
                    self.dispatch_listing();
                }
            }
            PageCommand::PrevPage => {
                if self.query.page > 1 {
                    self.query.page -= 1;
                    self.dispatch_listing();
                }
            }
            // Handled in the select loop.
            PageCommand::SearchInput(_) | PageCommand::Reset | PageCommand::Shutdown => {}
        }
    }

    fn reset_filters(&mut self) {
        if self.query.status_filter != StatusFilter::All || self.query.age_filter != AgeFilter::All
        {
            self.query.status_filter = StatusFilter::All;
            self.query.age_filter = AgeFilter::All;
            self.query.page = 1;
            self.dispatch_listing();
        }
    }

    /// The debounce timer fired: promote the raw input to the effective term.
    fn commit_search_term(&mut self) {
        let changed = self.query.search_term != self.query.search_input || self.query.page != 1;
        self.query.search_term = self.query.search_input.clone();
        self.query.page = 1;
        if changed {
            self.dispatch_listing();
        }
    }

    fn dispatch_listing(&mut self) {
        self.seq += 1;
        let seq = self.seq;
        self.listing.loading = true;

        let request = listing::plan_request(&self.query);
        let client = Arc::clone(&self.client);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.users().list(&request).await;
            let _ = tx.send(FetchMessage::Listing { seq, result }).await;
        });
    }

    fn spawn_stats_fetch(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let request = ListUsersQuery::new(0, CANDIDATE_POOL_SIZE);
            let result = client.users().list(&request).await;
            let _ = tx.send(FetchMessage::Stats { result }).await;
        });
    }

    fn handle_fetch(&mut self, msg: FetchMessage) {
        match msg {
            FetchMessage::Listing { seq, result } => {
                if seq != self.seq {
                    debug!(seq, latest = self.seq, "Discarding stale listing response");
                    return;
                }
                self.listing.loading = false;
                match result {
                    Ok(page) => {
                        let outcome = listing::apply_response(&self.query, page);
                        self.listing.rows = outcome.rows;
                        self.listing.total_pages = outcome.total_pages;
                        self.listing.total_elements = outcome.total_elements;
                        if let Some(total) = outcome.stats_total {
                            self.stats.total = total;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Failed to fetch user listing");
                        // Rows clear; pagination figures keep their last values.
                        self.listing.rows.clear();
                    }
                }
            }
            FetchMessage::Stats { result } => match result {
                Ok(page) => {
                    self.stats =
                        DirectoryStats::compute(page.total_elements, &page.content, Utc::now());
                }
                Err(err) => {
                    warn!(error = %err, "Failed to fetch directory stats");
                }
            },
        }
    }

    fn publish(&self) {
        self.view_tx
            .send_replace(render(&self.query, &self.listing, &self.stats));
    }
}

/// Resolves when the armed debounce timer fires; pends forever when unarmed.
async fn poll_debounce(debounce: &mut Option<Pin<Box<Sleep>>>) {
    match debounce.as_mut() {
        Some(timer) => timer.await,
        None => std::future::pending().await,
    }
}
