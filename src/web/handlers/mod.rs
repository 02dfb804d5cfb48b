//! HTML page and fragment handlers.

mod posts;

pub use posts::{
    POST_CREATED_EVENT, create_post_handler, delete_post_handler, edit_post_form_handler,
    index_handler, new_post_form_handler, posts_list_handler, update_post_handler,
    view_post_handler,
};
