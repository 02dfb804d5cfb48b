//! MongoDB implementation of the post repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPost, Post, PostId};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::POSTS_COLLECTION;

/// Stored shape of a post in the `posts` collection.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    content: String,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Post {
            id: PostId::new(document.id.to_hex()),
            title: document.title,
            content: document.content,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.to_chrono(),
        }
    }
}

/// MongoDB repository for post storage and retrieval.
///
/// Identifiers are ObjectIds exposed as 24-character hex strings.
pub struct MongoPostRepository {
    database: Database,
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    /// Creates a new repository on top of a database handle.
    pub fn new(database: Database) -> Self {
        let collection = database.collection(POSTS_COLLECTION);
        Self {
            database,
            collection,
        }
    }

    async fn find_page(
        &self,
        filter: Document,
        limit: u64,
        offset: u64,
        operation: &'static str,
    ) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(offset)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(|e| AppError::store(operation, e))?;

        let documents: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::store(operation, e))?;

        Ok(documents.into_iter().map(Post::from).collect())
    }
}

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::invalid_id(id))
}

/// Case-insensitive substring match on title or content.
///
/// The query is escaped so it never acts as a pattern.
fn search_filter(query: &str) -> Document {
    let pattern = regex::escape(query);
    doc! {
        "$or": [
            { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            { "content": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let now = bson::DateTime::now();
        let document = PostDocument {
            id: ObjectId::new(),
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| AppError::store("create", e))?;

        Ok(document.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, AppError> {
        let object_id = parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::store("find_by_id", e))?
            .map(Post::from)
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn find_all(&self, limit: u64, offset: u64) -> Result<Vec<Post>, AppError> {
        self.find_page(doc! {}, limit, offset, "find_all").await
    }

    async fn search(&self, query: &str, limit: u64, offset: u64) -> Result<Vec<Post>, AppError> {
        self.find_page(search_filter(query), limit, offset, "search")
            .await
    }

    async fn update(&self, mut post: Post) -> Result<Post, AppError> {
        let object_id = parse_id(post.id.as_str())?;
        let updated_at = bson::DateTime::now();

        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": {
                        "title": post.title.as_str(),
                        "content": post.content.as_str(),
                        "updated_at": updated_at,
                    }
                },
            )
            .await
            .map_err(|e| AppError::store("update", e))?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(post.id.as_str()));
        }

        post.updated_at = updated_at.to_chrono();
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::store("delete", e))?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found(id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::store("count", e))
    }

    async fn count_search(&self, query: &str) -> Result<u64, AppError> {
        self.collection
            .count_documents(search_filter(query))
            .await
            .map_err(|e| AppError::store("count_search", e))
    }

    async fn health_check(&self) -> bool {
        self.database.run_command(doc! { "ping": 1 }).await.is_ok()
    }
}
