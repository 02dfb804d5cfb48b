#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use newsboard::application::services::PostService;
use newsboard::domain::entities::{NewPost, Post, PostId};
use newsboard::domain::repositories::PostRepository;
use newsboard::error::AppError;
use newsboard::routes::build_router;
use newsboard::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Repository backed by a vector, ordered and validated like the MongoDB one.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    offline: AtomicBool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a store error and the ping fail.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn check_online(&self, operation: &'static str) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(AppError::store(operation, "connection refused"))
        } else {
            Ok(())
        }
    }

    fn sorted(&self, filter: impl Fn(&Post) -> bool) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter(p))
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        posts
    }
}

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::invalid_id(id))
}

fn matches(post: &Post, query: &str) -> bool {
    let query = query.to_lowercase();
    post.title.to_lowercase().contains(&query) || post.content.to_lowercase().contains(&query)
}

fn page(posts: Vec<Post>, limit: u64, offset: u64) -> Vec<Post> {
    posts
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        self.check_online("create")?;
        let now = Utc::now();
        let post = Post {
            id: PostId::new(ObjectId::new().to_hex()),
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, AppError> {
        self.check_online("find_by_id")?;
        parse_id(id)?;
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn find_all(&self, limit: u64, offset: u64) -> Result<Vec<Post>, AppError> {
        self.check_online("find_all")?;
        Ok(page(self.sorted(|_| true), limit, offset))
    }

    async fn search(&self, query: &str, limit: u64, offset: u64) -> Result<Vec<Post>, AppError> {
        self.check_online("search")?;
        Ok(page(self.sorted(|p| matches(p, query)), limit, offset))
    }

    async fn update(&self, mut post: Post) -> Result<Post, AppError> {
        self.check_online("update")?;
        parse_id(post.id.as_str())?;
        let mut posts = self.posts.lock().unwrap();
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| AppError::not_found(post.id.as_str()))?;

        post.updated_at = Utc::now();
        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.updated_at = post.updated_at;
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.check_online("delete")?;
        parse_id(id)?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id.as_str() != id);
        if posts.len() == before {
            return Err(AppError::not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.check_online("count")?;
        Ok(self.len() as u64)
    }

    async fn count_search(&self, query: &str) -> Result<u64, AppError> {
        self.check_online("count_search")?;
        Ok(self.sorted(|p| matches(p, query)).len() as u64)
    }

    async fn health_check(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryPostRepository>) {
    let repository = Arc::new(InMemoryPostRepository::new());
    let post_service = Arc::new(PostService::new(repository.clone()));
    (AppState::with_default_page_size(post_service), repository)
}

/// Full application router over an in-memory store.
pub fn create_test_app() -> (axum::Router, Arc<InMemoryPostRepository>) {
    let (state, repository) = create_test_state();
    (build_router(state, Duration::from_secs(5)), repository)
}

pub async fn create_test_post(
    repository: &InMemoryPostRepository,
    title: &str,
    content: &str,
) -> Post {
    repository
        .create(NewPost::new(title, content))
        .await
        .unwrap()
}
