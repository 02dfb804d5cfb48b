//! MongoDB persistence.
//!
//! Concrete implementation of the domain repository trait on top of the
//! official MongoDB driver, plus connection and index bootstrap.
//!
//! # Components
//!
//! - [`MongoStore`] - Client setup, startup retry, migrations, shutdown
//! - [`MongoPostRepository`] - Post storage and retrieval

pub mod mongo_post_repository;
pub mod mongo_store;

pub use mongo_post_repository::MongoPostRepository;
pub use mongo_store::MongoStore;

/// Collection holding post documents.
pub const POSTS_COLLECTION: &str = "posts";
