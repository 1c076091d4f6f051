/// Bookclub console - member administration over the admin API
use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use bookclub_admin::{DirectoryPage, PageCommand, PageView, CANDIDATE_POOL_SIZE};
use bookclub_core::{AgeFilter, DirectoryStats, SearchField, StatusFilter};
use bookclub_server_client::{BookclubClient, ListUsersQuery, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookclub-console")]
#[command(about = "Bookclub member administration console", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "BOOKCLUB_SERVER_URL")]
    server: String,

    /// Bearer token for admin endpoints
    #[arg(long, env = "BOOKCLUB_ACCESS_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the server and print its name and version
    Ping,
    /// Print directory statistics (total / active / recently active)
    Stats,
    /// List members
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Column to search: name or email
        #[arg(long, default_value = "name")]
        field: SearchField,
        /// Search keyword
        #[arg(long)]
        keyword: Option<String>,
        /// Status filter: all, active or dormant
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Age filter: all, 10s, 20s, 30s, 40s or 50+
        #[arg(long, default_value = "all")]
        age: AgeFilter,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::new(&cli.server);
    config.access_token = cli.token.clone();
    let client = BookclubClient::new(config).context("invalid server configuration")?;

    match cli.command {
        Commands::Ping => {
            let info = client.test_connection().await?;
            println!("{} v{}", info.name, info.version);
        }
        Commands::Stats => {
            // The listing API has no aggregation endpoint; counts come from
            // a capped candidate pool, same as the admin page's stat cards.
            let pool = client
                .users()
                .list(&ListUsersQuery::new(0, CANDIDATE_POOL_SIZE))
                .await?;
            let stats = DirectoryStats::compute(pool.total_elements, &pool.content, Utc::now());
            println!("total members:    {}", stats.total);
            println!("active members:   {}", stats.active);
            println!("active last 7d:   {}", stats.recent);
        }
        Commands::List {
            page,
            field,
            keyword,
            status,
            age,
        } => {
            list_members(Arc::new(client), page, field, keyword, status, age).await?;
        }
    }

    Ok(())
}

async fn list_members(
    client: Arc<BookclubClient>,
    page: u32,
    field: SearchField,
    keyword: Option<String>,
    status: StatusFilter,
    age: AgeFilter,
) -> anyhow::Result<()> {
    let directory = DirectoryPage::spawn(client);

    directory.send(PageCommand::SetSearchField(field)).await?;
    directory.send(PageCommand::SetStatusFilter(status)).await?;
    directory.send(PageCommand::SetAgeFilter(age)).await?;
    if let Some(keyword) = keyword.clone() {
        directory.send(PageCommand::SearchInput(keyword)).await?;
    }

    // Wait for the snapshot that reflects everything we asked for.
    let wanted_term = keyword.unwrap_or_default();
    let mut view = directory
        .wait_for(move |v| {
            v.query.search_field == field
                && v.query.status_filter == status
                && v.query.age_filter == age
                && v.query.search_term == wanted_term
                && !v.loading
        })
        .await?;

    if page > 1 {
        directory.send(PageCommand::GoToPage(page)).await?;
        view = directory
            .wait_for(move |v| !v.loading && v.query.page == page.clamp(1, v.pager.total))
            .await?;
    }

    print_view(&view);
    directory.send(PageCommand::Shutdown).await?;
    Ok(())
}

fn print_view(view: &PageView) {
    println!(
        "{:<12} {:<16} {:<28} {:<5} {:>5}  {:<17} {}",
        "joined", "nickname", "email", "age", "posts", "last active", "status"
    );
    if view.empty_state() {
        println!("(no data)");
    }
    for row in &view.rows {
        println!(
            "{:<12} {:<16} {:<28} {:<5} {:>5}  {:<17} {}",
            row.joined,
            row.nickname,
            row.email,
            row.age_band,
            row.post_count,
            row.last_active,
            row.status
        );
    }
    println!();
    println!(
        "page {} / {}  ({} members)",
        view.pager.current, view.pager.total, view.total_elements
    );
}
