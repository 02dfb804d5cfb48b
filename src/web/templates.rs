//! Askama templates and the view models they render.
//!
//! View models carry display-ready strings so templates stay free of
//! formatting logic.

use askama::Template;
use askama_web::WebTemplate;

use crate::application::services::PostPage;
use crate::domain::entities::{Post, ValidationError};

const EXCERPT_LEN: usize = 150;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display form of a post.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub created_at: String,
    pub updated_at: String,
    /// Whether the post changed after creation.
    pub edited: bool,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: excerpt(&post.content),
            created_at: post.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: post.updated_at.format(TIMESTAMP_FORMAT).to_string(),
            edited: post.updated_at > post.created_at,
        }
    }
}

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// A page of posts with pagination links.
#[derive(Debug, Clone)]
pub struct PostListView {
    pub posts: Vec<PostView>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub search: String,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl PostListView {
    pub fn new(page: &PostPage, search: Option<&str>) -> Self {
        let current_page = page.page;
        let prev_href = (current_page > 1).then(|| list_href(current_page - 1, search));
        let next_href =
            (current_page < page.total_pages).then(|| list_href(current_page + 1, search));

        Self {
            posts: page.posts.iter().map(PostView::from).collect(),
            current_page,
            total_pages: page.total_pages,
            total: page.total,
            search: search.unwrap_or_default().to_string(),
            prev_href,
            next_href,
        }
    }
}

/// Builds the fragment URL for a list page, keeping the search term.
fn list_href(page: u64, search: Option<&str>) -> String {
    match search {
        Some(query) => {
            let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
            format!("/posts?page={page}&search={encoded}")
        }
        None => format!("/posts?page={page}"),
    }
}

/// Values shown in the create/edit form.
///
/// The form is in edit mode when `post_id` is set.
#[derive(Debug, Clone, Default)]
pub struct PostFormView {
    pub post_id: Option<String>,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

impl PostFormView {
    /// Edit form pre-filled from a stored post.
    pub fn edit(post: &Post) -> Self {
        Self {
            post_id: Some(post.id.to_string()),
            title: post.title.clone(),
            content: post.content.clone(),
            error: None,
        }
    }

    /// Form echoing the submitted values next to the validation message.
    pub fn rejected(
        post_id: Option<String>,
        title: String,
        content: String,
        error: ValidationError,
    ) -> Self {
        Self {
            post_id,
            title,
            content,
            error: Some(error.to_string()),
        }
    }
}

/// Full home page: search box, post list and form container.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub list: PostListView,
}

/// Post list fragment, swapped in on pagination and search.
#[derive(Template, WebTemplate)]
#[template(path = "posts_list.html")]
pub struct PostsListTemplate {
    pub list: PostListView,
}

/// Single table row, returned after create and update.
#[derive(Template, WebTemplate)]
#[template(path = "post_row.html")]
pub struct PostRowTemplate {
    pub post: PostView,
}

/// Create/edit form fragment.
#[derive(Template, WebTemplate)]
#[template(path = "post_form.html")]
pub struct PostFormTemplate {
    pub form: PostFormView,
}

/// Read-only view of one post.
#[derive(Template, WebTemplate)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate {
    pub post: PostView,
}

/// Error page rendered by [`crate::error::AppError`].
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}
