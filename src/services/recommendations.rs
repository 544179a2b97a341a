use std::cmp::Ordering;

use crate::{catalog::Catalog, error::NotFoundError, models::RecommendationItem};

/// Number of similar books returned per lookup
pub const RECOMMENDATION_COUNT: usize = 4;

/// Finds the books most similar to `query`
///
/// `query` must equal a title index key exactly. Candidates are ranked by
/// descending similarity with ties kept in index order, and the top-ranked
/// entry is dropped since it is the query's own self-similarity. Each
/// remaining slot surfaces the first book row carrying that title.
pub fn recommend(catalog: &Catalog, query: &str) -> Result<Vec<RecommendationItem>, NotFoundError> {
    let not_found = || NotFoundError {
        query: query.to_string(),
    };

    let position = catalog.position_of(query).ok_or_else(not_found)?;
    let row = catalog.similarity_row(position).ok_or_else(not_found)?;

    let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    // sort_by is stable, so equal scores stay in ascending index order.
    // Scores are finite, and -0.0 compares equal to 0.0.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let items = ranked
        .into_iter()
        .skip(1)
        .take(RECOMMENDATION_COUNT)
        .filter_map(|(candidate, score)| {
            let title = catalog.title_index().get(candidate)?;
            let book = catalog.first_book_titled(title)?;
            tracing::debug!(candidate, score, title = %title, "Ranked candidate");
            Some(RecommendationItem::from(book))
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn catalog(titles: &[&str], books: Vec<Book>, similarity: Vec<Vec<f64>>) -> Catalog {
        Catalog::from_parts(
            vec![],
            books,
            titles.iter().map(|s| s.to_string()).collect(),
            similarity,
        )
        .unwrap()
    }

    fn one_book_each(titles: &[&str]) -> Vec<Book> {
        titles
            .iter()
            .map(|t| Book::new(*t, format!("{t} author"), format!("http://img/{t}.jpg")))
            .collect()
    }

    fn five_title_catalog() -> Catalog {
        let titles = ["A", "B", "C", "D", "E"];
        catalog(
            &titles,
            one_book_each(&titles),
            vec![
                vec![1.0, 0.9, 0.9, 0.5, 0.1],
                vec![0.9, 1.0, 0.3, 0.2, 0.8],
                vec![0.9, 0.3, 1.0, 0.6, 0.4],
                vec![0.5, 0.2, 0.6, 1.0, 0.7],
                vec![0.1, 0.8, 0.4, 0.7, 1.0],
            ],
        )
    }

    fn titles_of(items: &[RecommendationItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_index_order() {
        let catalog = five_title_catalog();
        let items = recommend(&catalog, "A").unwrap();
        assert_eq!(titles_of(&items), vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn test_signed_zero_scores_tie_in_index_order() {
        let titles = ["A", "B", "C", "D", "E"];
        let catalog = catalog(
            &titles,
            one_book_each(&titles),
            vec![
                vec![1.0, -0.0, 0.0, -0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 1.0, 0.0],
                vec![0.0, 0.0, 0.0, 0.0, 1.0],
            ],
        );
        let items = recommend(&catalog, "A").unwrap();
        assert_eq!(titles_of(&items), vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn test_returns_fixed_count_excluding_self() {
        let catalog = five_title_catalog();
        for title in ["A", "B", "C", "D", "E"] {
            let items = recommend(&catalog, title).unwrap();
            assert_eq!(items.len(), RECOMMENDATION_COUNT);
            assert!(items.iter().all(|item| item.title != title));
        }
    }

    #[test]
    fn test_orders_by_descending_similarity() {
        let catalog = five_title_catalog();
        let items = recommend(&catalog, "D").unwrap();
        assert_eq!(titles_of(&items), vec!["E", "C", "A", "B"]);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let catalog = five_title_catalog();
        let err = recommend(&catalog, "Nonexistent Title").unwrap_err();
        assert_eq!(err.query, "Nonexistent Title");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = five_title_catalog();
        assert!(recommend(&catalog, "a").is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let catalog = five_title_catalog();
        let first = recommend(&catalog, "C").unwrap();
        let second = recommend(&catalog, "C").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_book_rows_surface_once() {
        let titles = ["Q", "R", "S", "T", "U"];
        let mut books = vec![
            Book::new("R", "First Author", "http://img/r-first.jpg"),
            Book::new("R", "Second Author", "http://img/r-second.jpg"),
            Book::new("R", "Third Author", "http://img/r-third.jpg"),
        ];
        books.extend(one_book_each(&["Q", "S", "T", "U"]));
        let catalog = catalog(
            &titles,
            books,
            vec![
                vec![1.0, 0.9, 0.8, 0.7, 0.6],
                vec![0.9, 1.0, 0.1, 0.1, 0.1],
                vec![0.8, 0.1, 1.0, 0.1, 0.1],
                vec![0.7, 0.1, 0.1, 1.0, 0.1],
                vec![0.6, 0.1, 0.1, 0.1, 1.0],
            ],
        );

        let items = recommend(&catalog, "Q").unwrap();
        assert_eq!(items.len(), RECOMMENDATION_COUNT);
        let r_items: Vec<_> = items.iter().filter(|item| item.title == "R").collect();
        assert_eq!(r_items.len(), 1);
        assert_eq!(r_items[0].author, "First Author");
        assert_eq!(r_items[0].cover_image_url, "http://img/r-first.jpg");
    }

    #[test]
    fn test_small_index_returns_available_candidates() {
        let titles = ["X", "Y", "Z"];
        let catalog = catalog(
            &titles,
            one_book_each(&titles),
            vec![
                vec![1.0, 0.2, 0.4],
                vec![0.2, 1.0, 0.3],
                vec![0.4, 0.3, 1.0],
            ],
        );
        let items = recommend(&catalog, "X").unwrap();
        assert_eq!(titles_of(&items), vec!["Z", "Y"]);
    }
}
