//! # News Board
//!
//! A server-rendered news board: create, list, search, edit and delete
//! posts through HTML pages updated in place with htmx. Built with Axum,
//! Askama and MongoDB.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Post entity, validation rules and the repository trait
//! - **Application Layer** ([`application`]) - Pagination and search orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB store and repository
//! - **Web Layer** ([`web`]) - Pages, htmx fragments and forms
//! - **API Layer** ([`api`]) - JSON health check and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export MONGODB_DATABASE="newsdb"
//!
//! # Collections and indexes are created on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PostPage, PostService};
    pub use crate::domain::entities::{NewPost, Post, PostId, ValidationError};
    pub use crate::domain::repositories::PostRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
