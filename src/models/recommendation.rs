use serde::Serialize;

use super::Book;

/// One slot of a recommendation result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationItem {
    pub title: String,
    pub author: String,
    pub cover_image_url: String,
}

impl RecommendationItem {
    /// Flattens the item into the `[title, author, image]` triple the
    /// recommend view expects.
    pub fn into_triple(self) -> [String; 3] {
        [self.title, self.author, self.cover_image_url]
    }
}

impl From<&Book> for RecommendationItem {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            cover_image_url: book.cover_image_url.clone(),
        }
    }
}
