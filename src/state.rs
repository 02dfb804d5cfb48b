//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{DEFAULT_PAGE_SIZE, PostService};

/// Application state shared across all request handlers.
///
/// Cloned per request; the service sits behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    /// Posts per page rendered by the list views.
    pub page_size: i64,
}

impl AppState {
    pub fn new(post_service: Arc<PostService>, page_size: i64) -> Self {
        Self {
            post_service,
            page_size,
        }
    }

    /// State with the default page size.
    pub fn with_default_page_size(post_service: Arc<PostService>) -> Self {
        Self::new(post_service, DEFAULT_PAGE_SIZE)
    }
}
