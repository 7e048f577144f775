//! Book model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Omitted from the JSON body when the book has no author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author,
        }
    }

    /// Case-insensitive substring match on the author.
    /// `needle` must already be lowercase.
    pub fn author_contains(&self, needle: &str) -> bool {
        self.author
            .as_deref()
            .is_some_and(|author| author.to_lowercase().contains(needle))
    }
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Update book request. Absent (or null) fields leave the stored value as is.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    /// An empty string clears the author
    pub author: Option<String>,
}

/// Query string of `GET /books/search`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Case-insensitive substring of the author name
    pub author: Option<String>,
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
