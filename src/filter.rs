use crate::cli::CliArgs;
use crate::model::{Book, Dataset};

/// Form value meaning "do not constrain this field".
pub const ANY: &str = "any";

/// Author or genre constraint from the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    Any,
    Id(String),
}

impl Selector {
    /// Parse a submitted form value. Only the literal `any` is unconstrained;
    /// anything else is treated as an id, even if no book carries it.
    pub fn parse(value: &str) -> Self {
        if value == ANY {
            Selector::Any
        } else {
            Selector::Id(value.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    /// The value as the search form submits it.
    pub fn as_form_value(&self) -> &str {
        match self {
            Selector::Any => ANY,
            Selector::Id(id) => id,
        }
    }
}

/// Criteria submitted by the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selector,
    pub genre: Selector,
}

impl FilterCriteria {
    /// Build criteria from the raw `{ title, author, genre }` form fields.
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        FilterCriteria {
            title: title.to_string(),
            author: Selector::parse(author),
            genre: Selector::parse(genre),
        }
    }

    /// Build criteria from CLI flags. Missing flags mean "any".
    pub fn from_cli(args: &CliArgs) -> Self {
        FilterCriteria::from_form(
            args.title.as_deref().unwrap_or(""),
            args.author.as_deref().unwrap_or(ANY),
            args.genre.as_deref().unwrap_or(ANY),
        )
    }

    /// Returns `true` if these criteria match every book.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Check a single book against all three constraints.
    pub fn matches(&self, book: &Book) -> bool {
        self.check_title(book) && self.check_author(book) && self.check_genre(book)
    }

    // -- private helpers --

    fn check_title(&self, book: &Book) -> bool {
        // A blank query matches everything, but a non-blank one is compared
        // as typed, surrounding whitespace included.
        if self.title.trim().is_empty() {
            return true;
        }
        book.title
            .to_lowercase()
            .contains(&self.title.to_lowercase())
    }

    fn check_author(&self, book: &Book) -> bool {
        match &self.author {
            Selector::Any => true,
            Selector::Id(id) => book.author == *id,
        }
    }

    fn check_genre(&self, book: &Book) -> bool {
        match &self.genre {
            Selector::Any => true,
            Selector::Id(id) => book.has_genre(id),
        }
    }
}

/// Return the books of `dataset` matching `criteria`, in dataset order.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Book> {
    dataset
        .books
        .iter()
        .filter(|book| criteria.matches(book))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
