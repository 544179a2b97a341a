use std::collections::HashMap;

use crate::{
    error::CatalogError,
    models::{Book, PopularityEntry},
};

mod load;

pub use load::{load_all, BOOKS_FILE, POPULARITY_FILE, SIMILARITY_FILE, TITLE_INDEX_FILE};

/// Square item-item similarity matrix stored row-major
///
/// Row `i` holds the similarity of item `i` to every item, in title index
/// order. The matrix is not assumed to be symmetric.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds the matrix from nested rows, checking that it is `size`×`size`
    /// and that every score is finite.
    pub fn from_rows(rows: Vec<Vec<f64>>, size: usize) -> Result<Self, CatalogError> {
        if rows.len() != size {
            return Err(CatalogError::RowCountMismatch {
                rows: rows.len(),
                titles: size,
            });
        }

        let mut scores = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(CatalogError::ColumnCountMismatch {
                    row,
                    columns: values.len(),
                    expected: size,
                });
            }
            if let Some(column) = values.iter().position(|score| !score.is_finite()) {
                return Err(CatalogError::NonFiniteScore { row, column });
            }
            scores.extend(values);
        }

        Ok(Self { size, scores })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `index`, or `None` if it is out of range
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}

/// Read-only tables loaded once at startup
///
/// Lookups by title go through maps built at construction, so requests never
/// scan the tables.
#[derive(Debug)]
pub struct Catalog {
    popularity: Vec<PopularityEntry>,
    books: Vec<Book>,
    title_index: Vec<String>,
    similarity: SimilarityMatrix,
    positions: HashMap<String, usize>,
    first_books: HashMap<String, usize>,
}

impl Catalog {
    /// Assembles a catalog from already decoded tables
    ///
    /// Fails if the similarity matrix does not line up with the title index,
    /// or if an indexed title has no book row.
    pub fn from_parts(
        popularity: Vec<PopularityEntry>,
        books: Vec<Book>,
        title_index: Vec<String>,
        similarity: Vec<Vec<f64>>,
    ) -> Result<Self, CatalogError> {
        let similarity = SimilarityMatrix::from_rows(similarity, title_index.len())?;

        let mut positions = HashMap::with_capacity(title_index.len());
        for (position, title) in title_index.iter().enumerate() {
            positions.entry(title.clone()).or_insert(position);
        }

        // First occurrence in catalog order wins.
        let mut first_books = HashMap::new();
        for (row, book) in books.iter().enumerate() {
            first_books.entry(book.title.clone()).or_insert(row);
        }

        if let Some(missing) = title_index
            .iter()
            .find(|title| !first_books.contains_key(*title))
        {
            return Err(CatalogError::MissingBook(missing.clone()));
        }

        Ok(Self {
            popularity,
            books,
            title_index,
            similarity,
            positions,
            first_books,
        })
    }

    pub fn popularity(&self) -> &[PopularityEntry] {
        &self.popularity
    }

    /// First `n` popularity entries in stored order, or all of them if fewer
    pub fn top_popular(&self, n: usize) -> &[PopularityEntry] {
        &self.popularity[..n.min(self.popularity.len())]
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn title_index(&self) -> &[String] {
        &self.title_index
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Row position of `title` in the title index (exact, case-sensitive)
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn similarity_row(&self, position: usize) -> Option<&[f64]> {
        self.similarity.row(position)
    }

    /// The first book row carrying `title`, in catalog order
    pub fn first_book_titled(&self, title: &str) -> Option<&Book> {
        self.first_books.get(title).map(|&row| &self.books[row])
    }
}
