//! Query and form payloads accepted by the web handlers.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::error::AppError;

/// Query parameters of the list and index pages.
///
/// A `page` that is missing or not a number is ignored rather than rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub search: Option<String>,
}

impl ListQuery {
    /// Requested page, 1 when absent or below 1.
    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Trimmed search term, `None` when empty.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// `?id=` parameter of the view and edit pages.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl IdQuery {
    /// Returns the id or rejects the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the id is missing or empty.
    pub fn require(&self) -> Result<&str, AppError> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(AppError::BadRequest("Post ID required"))
    }
}

/// Submitted create/edit form.
///
/// Missing fields deserialize as empty strings and are caught by validation.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn list_query(uri: &'static str) -> ListQuery {
        Query::<ListQuery>::try_from_uri(&Uri::from_static(uri))
            .unwrap()
            .0
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(list_query("/posts").page(), 1);
        assert_eq!(list_query("/posts?page=3").page(), 3);
        assert_eq!(list_query("/posts?page=0").page(), 1);
        assert_eq!(list_query("/posts?page=-2").page(), 1);
        assert_eq!(list_query("/posts?page=abc").page(), 1);
        assert_eq!(list_query("/posts?page=").page(), 1);
    }

    #[test]
    fn test_search_normalization() {
        assert_eq!(list_query("/posts").search(), None);
        assert_eq!(list_query("/posts?search=").search(), None);
        assert_eq!(list_query("/posts?search=%20%20").search(), None);
        assert_eq!(list_query("/posts?search=%20Go%20").search(), Some("Go"));
        assert_eq!(list_query("/posts?search=rust+lang").search(), Some("rust lang"));
    }

    #[test]
    fn test_id_query_require() {
        let missing = IdQuery { id: None };
        assert!(matches!(missing.require(), Err(AppError::BadRequest(_))));

        let empty = IdQuery {
            id: Some(String::new()),
        };
        assert!(empty.require().is_err());

        let present = IdQuery {
            id: Some("65a1f0c2e4b0a1b2c3d4e5f6".to_string()),
        };
        assert_eq!(present.require().unwrap(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }
}
