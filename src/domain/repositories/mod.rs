//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Post CRUD, listing and search
//!
//! # Testing
//!
//! See integration tests in `tests/repository_post.rs` for usage examples.

pub mod post_repository;

pub use post_repository::PostRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
