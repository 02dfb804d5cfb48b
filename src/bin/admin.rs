//! CLI administration tool for newsboard.
//!
//! Provides commands for inspecting and maintaining the post store without
//! going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the collection and indexes
//! cargo run --bin admin -- db migrate
//!
//! # List posts, optionally filtered
//! cargo run --bin admin -- posts list --page 2 --search rust
//!
//! # Delete a post
//! cargo run --bin admin -- posts delete 65a1f0c2e4b0a1b2c3d4e5f6
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Same `MONGODB_*` variables as the server (see `newsboard::config`).

use newsboard::application::services::{PostPage, PostService};
use newsboard::config;
use newsboard::infrastructure::persistence::{MongoPostRepository, MongoStore};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

const LIST_PAGE_SIZE: i64 = 20;

/// CLI tool for managing newsboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage posts
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Post management subcommands.
#[derive(Subcommand)]
enum PostsAction {
    /// List posts, newest first
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Case-insensitive match on title or content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Delete a post
    Delete {
        /// Post ID (24-character hex)
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the posts collection and its indexes
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = MongoStore::connect(&config).await?;

    let result = match cli.command {
        Commands::Posts { action } => handle_posts_action(action, &store).await,
        Commands::Stats => handle_stats(&store).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.shutdown().await;
    result
}

fn post_service(store: &MongoStore) -> PostService {
    PostService::new(Arc::new(MongoPostRepository::new(store.database())))
}

/// Dispatches post management commands.
async fn handle_posts_action(action: PostsAction, store: &MongoStore) -> Result<()> {
    let service = post_service(store);

    match action {
        PostsAction::List { page, search } => list_posts(&service, page, search).await?,
        PostsAction::Delete { id, yes } => delete_post(&service, &id, yes).await?,
    }

    Ok(())
}

/// Prints one page of posts.
///
/// # Output Format
///
/// ```text
/// 📋 Posts (page 1 of 3)
///
///   ID                        Title                                    Created
///   ─────────────────────────────────────────────────────────────────────────────
///   65a1f0c2e4b0a1b2c3d4e5f6  Release notes                            2024-01-15 10:30
/// ```
async fn list_posts(service: &PostService, page: i64, search: Option<String>) -> Result<()> {
    let search = search.filter(|s| !s.trim().is_empty());

    let result: PostPage = match search.as_deref() {
        Some(term) => service.search_posts(term, page, LIST_PAGE_SIZE).await?,
        None => service.get_posts(page, LIST_PAGE_SIZE).await?,
    };

    println!(
        "{}",
        format!(
            "📋 Posts (page {} of {})",
            result.page,
            result.total_pages.max(1)
        )
        .bright_blue()
        .bold()
    );
    if let Some(term) = &search {
        println!("  Search: {}", term.cyan());
    }
    println!();

    if result.posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<25} {:<40} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for post in &result.posts {
        println!(
            "  {:<25} {:<40} {}",
            post.id.as_str().bright_black(),
            truncate(&post.title, 38).cyan(),
            post.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        result.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a post after showing it and asking for confirmation.
async fn delete_post(service: &PostService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Post".bright_blue().bold());
    println!();

    let post = service.get_post(id).await?;

    println!("  Title: {}", post.title.cyan());
    println!("  ID:    {}", post.id.as_str().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this post?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_post(id).await?;

    println!();
    println!("{}", "✅ Post deleted".green().bold());
    println!();

    Ok(())
}

/// Displays post statistics.
async fn handle_stats(store: &MongoStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let page = post_service(store).get_posts(1, 1).await?;
    let newest = page
        .posts
        .first()
        .map(|post| post.created_at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  Posts:  {}",
        page.total.to_string().bright_green().bold()
    );
    println!("  Newest: {}", newest.bright_white());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &MongoStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !store.health_check().await {
                anyhow::bail!("MongoDB did not answer ping");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Running migration...".bright_blue());

            store.migrate().await?;

            println!("{}", "✅ Collection and indexes ready".green().bold());
        }
    }

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max - 1).collect();
        format!("{head}…")
    }
}
