//! Server-rendered HTML layer.
//!
//! Full pages and htmx fragments rendered with Askama templates.
//!
//! # Modules
//!
//! - [`forms`] - Query and form payloads
//! - [`handlers`] - Page and fragment handlers
//! - [`routes`] - Route configuration
//! - [`templates`] - Template structs and view models

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod templates;
