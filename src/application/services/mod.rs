//! Business logic services for the application layer.

pub mod post_service;

pub use post_service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PostPage, PostService};
