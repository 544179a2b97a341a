use serde::Serialize;

use crate::models::{PopularityEntry, RecommendationItem};

/// Homepage view: one list per column, aligned by position
#[derive(Debug, Serialize, PartialEq)]
pub struct IndexView {
    pub book_name: Vec<String>,
    pub author: Vec<String>,
    pub image: Vec<String>,
    pub votes: Vec<u64>,
    pub rating: Vec<f64>,
}

impl From<&[PopularityEntry]> for IndexView {
    fn from(entries: &[PopularityEntry]) -> Self {
        Self {
            book_name: entries.iter().map(|e| e.title.clone()).collect(),
            author: entries.iter().map(|e| e.author.clone()).collect(),
            image: entries.iter().map(|e| e.cover_image_url.clone()).collect(),
            votes: entries.iter().map(|e| e.rating_count).collect(),
            rating: entries.iter().map(|e| e.average_rating).collect(),
        }
    }
}

/// Recommend page view
///
/// Carries either an error message or `[title, author, image]` triples. The
/// empty form carries neither.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct RecommendView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<[String; 3]>>,
}

impl RecommendView {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            data: None,
        }
    }

    pub fn data(items: Vec<RecommendationItem>) -> Self {
        Self {
            error: None,
            data: Some(items.into_iter().map(RecommendationItem::into_triple).collect()),
        }
    }
}

/// A one-shot message shown after a redirect
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notice {
    pub category: &'static str,
    pub message: &'static str,
}

/// Contact page view
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct ContactView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}
