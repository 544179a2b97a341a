use serde::{Deserialize, Serialize};

/// A row of the book metadata table
///
/// Several rows may share a title (different editions or authors). Display
/// identity is by title only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author")]
    pub author: String,
    #[serde(rename = "Image-URL-M")]
    pub cover_image_url: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        cover_image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover_image_url: cover_image_url.into(),
        }
    }
}
