mod book;
mod popularity;
mod recommendation;

pub use book::Book;
pub use popularity::PopularityEntry;
pub use recommendation::RecommendationItem;
