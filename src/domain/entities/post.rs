//! Post entity representing a short news article.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum content length, in characters.
pub const CONTENT_MAX_LEN: usize = 10_000;

/// Reasons a post is rejected before it reaches the store.
///
/// The `Display` output is the user-facing message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,
    #[error("title must be less than 200 characters")]
    TitleTooLong,
    #[error("content is required")]
    ContentRequired,
    #[error("content must be less than 10000 characters")]
    ContentTooLong,
}

/// Opaque post identifier assigned by the store.
///
/// Holds the store's textual key (a 24-character hex ObjectId for MongoDB).
/// The business layer never builds one itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Replaces title and content with their trimmed values and refreshes
    /// `updated_at`.
    ///
    /// Does not validate; call [`Post::validate`] afterwards.
    pub fn update(&mut self, title: &str, content: &str) {
        self.title = title.trim().to_string();
        self.content = content.trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Checks title and content against the entity rules.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, &self.content)
    }
}

/// Input data for a post that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Builds a post with trimmed fields and both timestamps set to now.
    ///
    /// Never fails; invalid values are reported by [`NewPost::validate`].
    pub fn new(title: &str, content: &str) -> Self {
        let now = Utc::now();
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// See [`Post::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, &self.content)
    }
}

// Emptiness is checked on the trimmed value, length on the stored one.
fn validate_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    if content.chars().count() > CONTENT_MAX_LEN {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}
