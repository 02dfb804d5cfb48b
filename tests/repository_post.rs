//! MongoDB repository tests.
//!
//! Run against a live deployment; every test uses its own throwaway database:
//!
//! ```bash
//! TEST_MONGODB_URI=mongodb://localhost:27017 cargo test --test repository_post -- --ignored
//! ```

use mongodb::bson::oid::ObjectId;
use newsboard::application::services::PostService;
use newsboard::config::Config;
use newsboard::domain::entities::NewPost;
use newsboard::domain::repositories::PostRepository;
use newsboard::error::AppError;
use newsboard::infrastructure::persistence::{MongoPostRepository, MongoStore};
use std::sync::Arc;

struct TestDb {
    store: MongoStore,
    repo: Arc<MongoPostRepository>,
}

impl TestDb {
    async fn teardown(self) {
        self.store.database().drop().await.unwrap();
        self.store.shutdown().await;
    }
}

async fn setup() -> TestDb {
    let uri = std::env::var("TEST_MONGODB_URI")
        .expect("TEST_MONGODB_URI must point at a MongoDB deployment");

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        mongodb_uri: uri,
        mongodb_database: format!("newsboard_test_{}", ObjectId::new().to_hex()),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        page_size_limit: 10,
        request_timeout_secs: 5,
        db_max_pool_size: 4,
        db_connect_timeout: 5,
        db_connect_retries: 2,
    };

    let store = MongoStore::connect(&config).await.unwrap();
    store.migrate().await.unwrap();
    let repo = Arc::new(MongoPostRepository::new(store.database()));

    TestDb { store, repo }
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_create_and_find() {
    let db = setup().await;

    let created = db
        .repo
        .create(NewPost::new("Hello", "World"))
        .await
        .unwrap();

    assert_eq!(created.id.as_str().len(), 24);
    assert_eq!(created.created_at, created.updated_at);

    let found = db.repo.find_by_id(created.id.as_str()).await.unwrap();
    assert_eq!(found.title, "Hello");
    assert_eq!(found.content, "World");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_find_missing_and_invalid_id() {
    let db = setup().await;

    let missing = db.repo.find_by_id(&ObjectId::new().to_hex()).await;
    assert!(matches!(missing, Err(AppError::NotFound { .. })));

    let invalid = db.repo.find_by_id("not-an-id").await;
    assert!(matches!(invalid, Err(AppError::InvalidId { .. })));

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_pagination_newest_first() {
    let db = setup().await;
    let service = PostService::new(db.repo.clone());

    for i in 1..=15 {
        service
            .create_post(&format!("Post {i:02}"), "Body")
            .await
            .unwrap();
    }

    let first = service.get_posts(1, 10).await.unwrap();
    assert_eq!(first.posts.len(), 10);
    assert_eq!(first.total, 15);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.posts[0].title, "Post 15");
    assert_eq!(first.posts[9].title, "Post 06");

    let second = service.get_posts(2, 10).await.unwrap();
    assert_eq!(second.posts.len(), 5);
    assert_eq!(second.posts[0].title, "Post 05");
    assert_eq!(second.posts[4].title, "Post 01");

    let beyond = service.get_posts(3, 10).await.unwrap();
    assert!(beyond.posts.is_empty());
    assert_eq!(beyond.total, 15);

    let far_beyond = service
        .get_posts(1_000_000_000_000_000_000, 10)
        .await
        .unwrap();
    assert!(far_beyond.posts.is_empty());
    assert_eq!(far_beyond.total, 15);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_search_case_insensitive_and_literal() {
    let db = setup().await;

    db.repo
        .create(NewPost::new("Learning Go", "Goroutines"))
        .await
        .unwrap();
    db.repo
        .create(NewPost::new("Rust", "Ownership and borrowing"))
        .await
        .unwrap();
    db.repo
        .create(NewPost::new("Weekend", "Time to GO outside"))
        .await
        .unwrap();
    db.repo
        .create(NewPost::new("C++ notes", "Templates"))
        .await
        .unwrap();

    let results = db.repo.search("go", 10, 0).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(db.repo.count_search("go").await.unwrap(), 2);
    assert_eq!(results[0].title, "Weekend");

    let literal = db.repo.search("c++", 10, 0).await.unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].title, "C++ notes");

    assert!(db.repo.search(".*", 10, 0).await.unwrap().is_empty());

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_update_refreshes_timestamp() {
    let db = setup().await;
    let service = PostService::new(db.repo.clone());

    let post = service.create_post("Before", "Old").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = service
        .update_post(post.id.as_str(), "After", "New")
        .await
        .unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at > post.updated_at);

    let stored = db.repo.find_by_id(post.id.as_str()).await.unwrap();
    assert_eq!(stored.content, "New");
    assert_eq!(stored.updated_at, updated.updated_at);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_update_missing_post() {
    let db = setup().await;

    let mut post = db
        .repo
        .create(NewPost::new("Title", "Body"))
        .await
        .unwrap();
    db.repo.delete(post.id.as_str()).await.unwrap();

    post.update("Title", "Changed");
    let result = db.repo.update(post).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_delete_twice() {
    let db = setup().await;

    let post = db
        .repo
        .create(NewPost::new("Title", "Body"))
        .await
        .unwrap();

    db.repo.delete(post.id.as_str()).await.unwrap();
    assert_eq!(db.repo.count().await.unwrap(), 0);

    let again = db.repo.delete(post.id.as_str()).await;
    assert!(matches!(again, Err(AppError::NotFound { .. })));

    let invalid = db.repo.delete("123").await;
    assert!(matches!(invalid, Err(AppError::InvalidId { .. })));

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn test_migrate_is_idempotent() {
    let db = setup().await;

    db.store.migrate().await.unwrap();
    assert!(db.store.health_check().await);
    assert!(db.repo.health_check().await);

    db.teardown().await;
}
