use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::Catalog;
use crate::error::CatalogError;

pub const POPULARITY_FILE: &str = "popular.json";
pub const TITLE_INDEX_FILE: &str = "pt.json";
pub const BOOKS_FILE: &str = "books.json";
pub const SIMILARITY_FILE: &str = "similarity_scores.json";

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, CatalogError> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Decode { path, source })
}

/// Loads and cross-checks the four catalog artifacts in `data_dir`
///
/// All or nothing: any missing, malformed or inconsistent artifact fails the
/// whole load.
pub fn load_all<P: AsRef<Path>>(data_dir: P) -> Result<Catalog, CatalogError> {
    let dir = data_dir.as_ref();
    info!(data_dir = %dir.display(), "Loading catalog artifacts");

    let popularity = read_artifact(dir, POPULARITY_FILE)?;
    let title_index = read_artifact(dir, TITLE_INDEX_FILE)?;
    let books = read_artifact(dir, BOOKS_FILE)?;
    let similarity = read_artifact(dir, SIMILARITY_FILE)?;

    let catalog = Catalog::from_parts(popularity, books, title_index, similarity)?;

    info!(
        popular = catalog.popularity().len(),
        books = catalog.books().len(),
        indexed_titles = catalog.title_index().len(),
        "Catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, value: serde_json::Value) {
        std::fs::write(dir.join(name), value.to_string()).unwrap();
    }

    fn write_valid_artifacts(dir: &Path) {
        write(
            dir,
            POPULARITY_FILE,
            json!([{
                "Book-Title": "Harry Potter and the Sorcerer's Stone",
                "Book-Author": "J. K. Rowling",
                "Image-URL-M": "http://img/hp1.jpg",
                "num_ratings": 571,
                "avg_rating": 4.737
            }]),
        );
        write(dir, TITLE_INDEX_FILE, json!(["1984", "Animal Farm"]));
        write(
            dir,
            BOOKS_FILE,
            json!([
                {"Book-Title": "1984", "Book-Author": "George Orwell", "Image-URL-M": "http://img/1984.jpg"},
                {"Book-Title": "Animal Farm", "Book-Author": "George Orwell", "Image-URL-M": "http://img/af.jpg"}
            ]),
        );
        write(dir, SIMILARITY_FILE, json!([[1.0, 0.42], [0.42, 1.0]]));
    }

    #[test]
    fn test_load_all_reads_every_artifact() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());

        let catalog = load_all(dir.path()).unwrap();

        assert_eq!(catalog.popularity().len(), 1);
        assert_eq!(catalog.popularity()[0].rating_count, 571);
        assert_eq!(catalog.books().len(), 2);
        assert_eq!(catalog.title_index(), &["1984", "Animal Farm"]);
        assert_eq!(catalog.similarity().size(), 2);
    }

    #[test]
    fn test_missing_artifact_is_io_error() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        std::fs::remove_file(dir.path().join(SIMILARITY_FILE)).unwrap();

        let err = load_all(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { ref path, .. } if path.ends_with(SIMILARITY_FILE)));
    }

    #[test]
    fn test_malformed_artifact_is_decode_error() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        write(dir.path(), BOOKS_FILE, json!([{"Book-Title": "1984"}]));

        let err = load_all(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { ref path, .. } if path.ends_with(BOOKS_FILE)));
    }

    #[test]
    fn test_dimension_mismatch_fails_load() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        write(dir.path(), SIMILARITY_FILE, json!([[1.0, 0.42, 0.1], [0.42, 1.0, 0.2]]));

        let err = load_all(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::ColumnCountMismatch { row: 0, columns: 3, expected: 2 }));
    }
}
