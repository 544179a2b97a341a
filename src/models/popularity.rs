use serde::{Deserialize, Serialize};

/// Summary row of the popularity table
///
/// The table arrives already ranked; entries are never re-sorted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularityEntry {
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author")]
    pub author: String,
    #[serde(rename = "Image-URL-M")]
    pub cover_image_url: String,
    /// Number of ratings the title received
    #[serde(rename = "num_ratings")]
    pub rating_count: u64,
    /// Mean rating across those ratings
    #[serde(rename = "avg_rating")]
    pub average_rating: f64,
}
