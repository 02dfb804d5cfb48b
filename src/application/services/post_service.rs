//! Post lifecycle and query service.

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Page size used when the caller asks for less than one item.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Largest offset the store accepts; MongoDB encodes `skip` as an `i64`.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// One page of posts plus the numbers needed to render pagination.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// Normalized page number (1-indexed).
    pub page: u64,
    /// Normalized page size.
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Service for creating, querying, updating and deleting posts.
///
/// Depends only on the [`PostRepository`] contract; the concrete store is
/// chosen at startup.
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] before touching the store if the
    /// trimmed input breaks the entity rules, or the store error otherwise.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post, AppError> {
        let new_post = NewPost::new(title, content);
        new_post.validate()?;

        self.repository.create(new_post).await
    }

    /// Retrieves a post by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::NotFound`] and [`AppError::InvalidId`] unchanged.
    pub async fn get_post(&self, id: &str) -> Result<Post, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists posts, newest first.
    ///
    /// `page` below 1 is treated as 1. `page_size` below 1 falls back to
    /// [`DEFAULT_PAGE_SIZE`] and is capped at [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns the store error if either the page or the count query fails.
    pub async fn get_posts(&self, page: i64, page_size: i64) -> Result<PostPage, AppError> {
        let (page, page_size) = normalize_pagination(page, page_size);
        let offset = page_offset(page, page_size);

        let posts = self.repository.find_all(page_size, offset).await?;
        let total = self.repository.count().await?;

        Ok(PostPage {
            posts,
            page,
            page_size,
            total,
            total_pages: total_pages(total, page_size),
        })
    }

    /// Lists posts whose title or content contains `query`, ignoring case.
    ///
    /// Pagination follows the same rules as [`PostService::get_posts`].
    ///
    /// # Errors
    ///
    /// Returns the store error if either the page or the count query fails.
    pub async fn search_posts(
        &self,
        query: &str,
        page: i64,
        page_size: i64,
    ) -> Result<PostPage, AppError> {
        let (page, page_size) = normalize_pagination(page, page_size);
        let offset = page_offset(page, page_size);

        let posts = self.repository.search(query, page_size, offset).await?;
        let total = self.repository.count_search(query).await?;

        Ok(PostPage {
            posts,
            page,
            page_size,
            total,
            total_pages: total_pages(total, page_size),
        })
    }

    /// Applies new title and content to an existing post.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] / [`AppError::InvalidId`] from the lookup
    /// - [`AppError::Validation`] if the new values break the entity rules
    /// - the store error if persisting fails
    pub async fn update_post(&self, id: &str, title: &str, content: &str) -> Result<Post, AppError> {
        let mut post = self.repository.find_by_id(id).await?;

        post.update(title, content);
        post.validate()?;

        self.repository.update(post).await
    }

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// Propagates the store error unchanged.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Returns whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

fn normalize_pagination(page: i64, page_size: i64) -> (u64, u64) {
    let page = page.max(1);
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size.min(MAX_PAGE_SIZE)
    };

    (page as u64, page_size as u64)
}

fn page_offset(page: u64, page_size: u64) -> u64 {
    (page - 1).saturating_mul(page_size).min(MAX_OFFSET)
}

fn total_pages(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size)
}
