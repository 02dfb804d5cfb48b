//! MongoDB connection bootstrap and schema setup.

use anyhow::{Context, Result};
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;
use crate::infrastructure::persistence::POSTS_COLLECTION;

/// Index on `created_at` backing the newest-first ordering.
pub const CREATED_AT_INDEX: &str = "created_at_desc";

/// Text index over title and content.
pub const TEXT_INDEX: &str = "title_content_text";

/// Handle to the MongoDB deployment used by the application.
///
/// Owns the driver client (and its connection pool). Repositories receive
/// cloned [`Database`] handles that share the same pool.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects to MongoDB and waits until the deployment answers a ping.
    ///
    /// The ping is retried with exponential backoff up to
    /// `config.db_connect_retries` times.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI cannot be parsed or the deployment never
    /// answers.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("Invalid MongoDB connection string")?;

        let timeout = Duration::from_secs(config.db_connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.max_pool_size = Some(config.db_max_pool_size);

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let database = client.database(&config.mongodb_database);

        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(config.db_connect_retries);

        let db = &database;
        Retry::spawn(strategy, move || async move {
            db.run_command(doc! { "ping": 1 }).await.inspect_err(|e| {
                tracing::warn!(error = %e, "MongoDB ping failed");
            })
        })
        .await
        .context("Failed to reach MongoDB")?;

        tracing::info!(database = %config.mongodb_database, "Connected to MongoDB");

        Ok(Self { client, database })
    }

    /// Returns a handle to the application database.
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Ensures the posts collection and its indexes exist.
    ///
    /// Safe to run on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if listing or creating collections or indexes fails.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Starting database migration");

        self.ensure_collection(POSTS_COLLECTION).await?;

        self.ensure_index(doc! { "created_at": -1 }, CREATED_AT_INDEX)
            .await?;
        self.ensure_index(doc! { "title": "text", "content": "text" }, TEXT_INDEX)
            .await?;

        tracing::info!("Database migration completed");
        Ok(())
    }

    /// Checks connectivity with a ping.
    pub async fn health_check(&self) -> bool {
        self.database.run_command(doc! { "ping": 1 }).await.is_ok()
    }

    /// Closes the client and its connection pool.
    pub async fn shutdown(self) {
        tracing::info!("Disconnecting from MongoDB");
        self.client.shutdown().await;
    }

    async fn ensure_collection(&self, name: &str) -> Result<()> {
        let existing = self
            .database
            .list_collection_names()
            .filter(doc! { "name": name })
            .await
            .context("Failed to list collections")?;

        if existing.is_empty() {
            self.database
                .create_collection(name)
                .await
                .with_context(|| format!("Failed to create collection {name}"))?;
            tracing::info!(collection = name, "Collection created");
        } else {
            tracing::info!(collection = name, "Collection already exists");
        }

        Ok(())
    }

    async fn ensure_index(&self, keys: Document, name: &str) -> Result<()> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        self.database
            .collection::<Document>(POSTS_COLLECTION)
            .create_index(index)
            .await
            .with_context(|| format!("Failed to create index {name}"))?;

        tracing::info!(collection = POSTS_COLLECTION, index = name, "Index ensured");
        Ok(())
    }
}
