use serde::Serialize;

use crate::model::{Book, Dataset};

/// What a grid cell shows for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

impl PreviewItem {
    pub fn from_book(book: &Book, dataset: &Dataset) -> Self {
        PreviewItem {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: dataset.author_name(&book.author).to_string(),
        }
    }
}

/// Fields of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    pub title: String,
    /// `"Author (year)"`.
    pub subtitle: String,
    pub description: String,
    /// Genre display names, in genre-id order.
    pub genres: Vec<String>,
}

impl BookDetail {
    pub fn from_book(book: &Book, dataset: &Dataset) -> Self {
        BookDetail {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                dataset.author_name(&book.author),
                book.published_year()
            ),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .filter_map(|g| dataset.genre_name(g))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::forty_books;

    #[test]
    fn test_preview_resolves_author_name() {
        let ds = forty_books();
        let book = ds.books.iter().find(|b| b.id == "b7").unwrap();
        let item = PreviewItem::from_book(book, &ds);
        assert_eq!(item.id, "b7");
        assert_eq!(item.title, "Book Number 7");
        assert_eq!(item.author, "Ada Lovelace");
        assert_eq!(item.image, book.image);
    }

    #[test]
    fn test_detail_subtitle_has_year() {
        let ds = forty_books();
        let book = ds.books.iter().find(|b| b.id == "b10").unwrap();
        let detail = BookDetail::from_book(book, &ds);
        assert_eq!(detail.subtitle, "Alan Turing (1990)");
        assert_eq!(detail.description, "Description of Book Number 10");
        assert_eq!(detail.genres, vec!["Computing", "History"]);
    }
}
