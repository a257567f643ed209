use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::book::Book;
use crate::error::{FolioError, Result};
use crate::filter::ANY;

/// Display name used when a book references an author id with no entry.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

const SAMPLE_DATASET: &str = include_str!("../../data/books.json");

/// The read-only catalog: books plus the author and genre name tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: BTreeMap<String, String>,
    #[serde(default)]
    pub genres: BTreeMap<String, String>,
}

impl Dataset {
    /// Build a dataset from already-parsed parts, applying the same checks as
    /// the JSON loaders.
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self> {
        let dataset = Dataset {
            books,
            authors,
            genres,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Dataset = serde_json::from_str(json)?;
        Self::new(raw.books, raw.authors, raw.genres)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            books = dataset.books.len(),
            authors = dataset.authors.len(),
            genres = dataset.genres.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// The catalog bundled with the binary, used when no file is given.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_DATASET)
    }

    pub fn author_name(&self, id: &str) -> &str {
        self.authors
            .get(id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if self.authors.contains_key(ANY) {
            return Err(FolioError::Dataset(format!(
                "'{}' is reserved and cannot be an author id",
                ANY
            )));
        }
        if self.genres.contains_key(ANY) {
            return Err(FolioError::Dataset(format!(
                "'{}' is reserved and cannot be a genre id",
                ANY
            )));
        }

        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(FolioError::Dataset(format!(
                    "duplicate book id: {}",
                    book.id
                )));
            }
            if !self.authors.contains_key(&book.author) {
                warn!(book = %book.id, author = %book.author, "book references unknown author");
            }
            for genre in &book.genres {
                if !self.genres.contains_key(genre) {
                    warn!(book = %book.id, genre = %genre, "book references unknown genre");
                }
            }
        }
        Ok(())
    }
}
