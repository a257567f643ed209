use tracing::{debug, info};

use crate::filter::{self, FilterCriteria};
use crate::model::{Book, Dataset};
use crate::pagination;

/// The current result set and how many pages of it have been loaded.
#[derive(Debug, Clone)]
pub struct CatalogState {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl CatalogState {
    /// Start with every book in the dataset on page 1.
    pub fn new(dataset: &Dataset, page_size: usize) -> Self {
        Self {
            matches: dataset.books.clone(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the result set and go back to page 1.
    pub fn replace_matches(&mut self, matches: Vec<Book>) {
        self.matches = matches;
        self.page = 1;
    }

    /// Run the filter engine over `dataset` and adopt its result.
    pub fn apply_filter(&mut self, dataset: &Dataset, criteria: &FilterCriteria) {
        let result: Vec<Book> = filter::filter(dataset, criteria)
            .into_iter()
            .cloned()
            .collect();
        info!(
            title = %criteria.title,
            author = criteria.author.as_form_value(),
            genre = criteria.genre.as_form_value(),
            matches = result.len(),
            "search applied"
        );
        self.replace_matches(result);
    }

    /// Load the next page. Callers disable the control when nothing remains,
    /// but calling it anyway only yields an empty page.
    pub fn advance(&mut self) {
        self.page = pagination::advance(self.page);
        debug!(page = self.page, remaining = self.remaining(), "page advanced");
    }

    /// Jump straight to `page` (clamped to 1). Used by the command line, where
    /// there is no incremental "show more".
    pub fn jump_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_page(&self) -> &[Book] {
        pagination::visible_page(&self.matches, self.page, self.page_size)
    }

    /// All books loaded so far, i.e. pages `1..=page`.
    pub fn shown(&self) -> &[Book] {
        pagination::shown(&self.matches, self.page, self.page_size)
    }

    pub fn remaining(&self) -> usize {
        pagination::remaining(&self.matches, self.page, self.page_size)
    }

    pub fn can_show_more(&self) -> bool {
        self.remaining() > 0
    }

    pub fn has_results(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Look a book up among the current matches only.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.matches.iter().find(|b| b.id == id)
    }
}
