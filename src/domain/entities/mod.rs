//! Core domain entities.
//!
//! The news board has a single entity, [`Post`]. Following the "New Type"
//! pattern, a [`NewPost`] carries the data of a post that has not been stored
//! yet; the store turns it into a [`Post`] with an identifier.

pub mod post;

pub use post::{CONTENT_MAX_LEN, NewPost, Post, PostId, TITLE_MAX_LEN, ValidationError};
