//! JSON API layer.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request observability
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
