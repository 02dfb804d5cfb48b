//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and querying posts.
///
/// Listing methods return posts ordered by `created_at`, newest first, and
/// paginate with `limit`/`offset`. Identifiers are passed as the store's
/// textual key so that malformed input can be told apart from missing data.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoPostRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_post.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Stores a new post.
    ///
    /// The store assigns a fresh identifier and stamps both timestamps,
    /// overwriting the values carried by `new_post`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on write failures.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by identifier.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidId`] if `id` is not a well-formed key
    /// - [`AppError::NotFound`] if no post has that identifier
    /// - [`AppError::Store`] on database errors
    async fn find_by_id(&self, id: &str) -> Result<Post, AppError>;

    /// Lists posts without filtering.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_all(&self, limit: u64, offset: u64) -> Result<Vec<Post>, AppError>;

    /// Lists posts whose title or content contains `query`, ignoring case.
    ///
    /// Matching is a plain substring test; `query` is never interpreted as
    /// a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn search(&self, query: &str, limit: u64, offset: u64) -> Result<Vec<Post>, AppError>;

    /// Persists title, content and a refreshed `updated_at` for an existing post.
    ///
    /// Returns the post as stored.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidId`] if the post identifier is malformed
    /// - [`AppError::NotFound`] if no post matched
    /// - [`AppError::Store`] on database errors
    async fn update(&self, post: Post) -> Result<Post, AppError>;

    /// Permanently removes a post.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidId`] if `id` is not a well-formed key
    /// - [`AppError::NotFound`] if nothing was deleted
    /// - [`AppError::Store`] on database errors
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Counts all posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<u64, AppError>;

    /// Counts posts matched by [`PostRepository::search`] for the same query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count_search(&self, query: &str) -> Result<u64, AppError>;

    /// Checks if the backing store answers.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
