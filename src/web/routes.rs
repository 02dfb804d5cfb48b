//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_post_handler, delete_post_handler, edit_post_form_handler, index_handler,
    new_post_form_handler, posts_list_handler, update_post_handler, view_post_handler,
};
use axum::{
    Router,
    routing::{get, put},
};

/// Pages and htmx fragments for post management.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /posts` - List fragment (pagination, search)
/// - `POST /posts` - Create, returns a row
/// - `GET /posts/new` - Empty form
/// - `GET /posts/edit?id=` - Pre-filled edit form
/// - `GET /posts/view?id=` - Read-only view
/// - `PUT /posts/{id}` - Update, returns a row
/// - `DELETE /posts/{id}` - Delete, empty body
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/posts", get(posts_list_handler).post(create_post_handler))
        .route("/posts/new", get(new_post_form_handler))
        .route("/posts/edit", get(edit_post_form_handler))
        .route("/posts/view", get(view_post_handler))
        .route(
            "/posts/{id}",
            put(update_post_handler).delete(delete_post_handler),
        )
}
