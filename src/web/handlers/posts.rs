//! Post pages and htmx fragments.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::PostPage;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{IdQuery, ListQuery, PostForm};
use crate::web::templates::{
    IndexTemplate, PostDetailTemplate, PostFormTemplate, PostFormView, PostListView,
    PostRowTemplate, PostView, PostsListTemplate,
};

/// Client-side event fired after a successful create.
pub const POST_CREATED_EVENT: &str = "postCreated";

/// Renders the home page with the first (or requested) page of posts.
///
/// # Endpoint
///
/// `GET /?page=&search=`
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<IndexTemplate, AppError> {
    let list = load_list(&state, &query).await?;
    Ok(IndexTemplate { list })
}

/// Renders the post list fragment.
///
/// # Endpoint
///
/// `GET /posts?page=&search=`
///
/// A non-empty `search` switches from the plain listing to a
/// case-insensitive title/content match.
pub async fn posts_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<PostsListTemplate, AppError> {
    let list = load_list(&state, &query).await?;
    Ok(PostsListTemplate { list })
}

async fn load_list(state: &AppState, query: &ListQuery) -> Result<PostListView, AppError> {
    let page = query.page();
    let search = query.search();

    let result: PostPage = match search {
        Some(term) => {
            tracing::debug!(search = term, page, "Searching posts");
            state
                .post_service
                .search_posts(term, page, state.page_size)
                .await?
        }
        None => {
            state
                .post_service
                .get_posts(page, state.page_size)
                .await?
        }
    };

    Ok(PostListView::new(&result, search))
}

/// Creates a post and returns its table row.
///
/// # Endpoint
///
/// `POST /posts` (form: `title`, `content`)
///
/// # Responses
///
/// - **200 OK**: the new row, with `HX-Trigger: postCreated`
/// - **400 Bad Request**: the form again, with the validation message
pub async fn create_post_handler(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    match state
        .post_service
        .create_post(&form.title, &form.content)
        .await
    {
        Ok(post) => {
            tracing::info!(id = %post.id, "Post created");
            let row = PostRowTemplate {
                post: PostView::from(&post),
            };
            Ok(([("HX-Trigger", POST_CREATED_EVENT)], row).into_response())
        }
        Err(AppError::Validation(error)) => {
            tracing::warn!(%error, "Post rejected");
            Ok(rejected_form(PostFormView::rejected(
                None,
                form.title,
                form.content,
                error,
            )))
        }
        Err(e) => Err(e),
    }
}

/// Updates a post and returns its refreshed row.
///
/// # Endpoint
///
/// `PUT /posts/{id}` (form: `title`, `content`)
///
/// # Responses
///
/// - **200 OK**: the updated row
/// - **400 Bad Request**: the edit form with the validation message, or an
///   invalid id
/// - **404 Not Found**: no post with that id
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    match state
        .post_service
        .update_post(&id, &form.title, &form.content)
        .await
    {
        Ok(post) => {
            tracing::info!(id = %post.id, "Post updated");
            let row = PostRowTemplate {
                post: PostView::from(&post),
            };
            Ok(row.into_response())
        }
        Err(AppError::Validation(error)) => {
            tracing::warn!(id = %id, %error, "Post update rejected");
            Ok(rejected_form(PostFormView::rejected(
                Some(id),
                form.title,
                form.content,
                error,
            )))
        }
        Err(e) => Err(e),
    }
}

/// Deletes a post.
///
/// # Endpoint
///
/// `DELETE /posts/{id}`
///
/// Answers 200 with an empty body so htmx swaps the row out.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(&id).await?;
    tracing::info!(id = %id, "Post deleted");
    Ok(StatusCode::OK)
}

/// Renders an empty create form.
///
/// # Endpoint
///
/// `GET /posts/new`
pub async fn new_post_form_handler() -> PostFormTemplate {
    PostFormTemplate {
        form: PostFormView::default(),
    }
}

/// Renders the edit form for an existing post.
///
/// # Endpoint
///
/// `GET /posts/edit?id={id}`
pub async fn edit_post_form_handler(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<PostFormTemplate, AppError> {
    let post = state.post_service.get_post(query.require()?).await?;
    Ok(PostFormTemplate {
        form: PostFormView::edit(&post),
    })
}

/// Renders the read-only view of a post.
///
/// # Endpoint
///
/// `GET /posts/view?id={id}`
pub async fn view_post_handler(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<PostDetailTemplate, AppError> {
    let post = state.post_service.get_post(query.require()?).await?;
    Ok(PostDetailTemplate {
        post: PostView::from(&post),
    })
}

/// 400 response carrying the form, retargeted at the form container.
fn rejected_form(form: PostFormView) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [
            ("HX-Retarget", "#form-container"),
            ("HX-Reswap", "innerHTML"),
        ],
        PostFormTemplate { form },
    )
        .into_response()
}
