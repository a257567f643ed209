use crate::filter::{FilterCriteria, ANY};
use crate::model::Dataset;
use crate::ui::theme::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

/// One entry of a selector: the submitted value and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Search overlay fields. Values survive between openings of the overlay.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub title: String,
    pub focus: SearchField,
    pub authors: Vec<SelectOption>,
    pub genres: Vec<SelectOption>,
    pub author_index: usize,
    pub genre_index: usize,
}

impl SearchForm {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            title: String::new(),
            focus: SearchField::Title,
            authors: build_options("All Authors", dataset.authors.iter()),
            genres: build_options("All Genres", dataset.genres.iter()),
            author_index: 0,
            genre_index: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
            SearchField::Genre => SearchField::Author,
        };
    }

    /// Step the focused selector by `delta`, wrapping around. No effect on
    /// the title field.
    pub fn cycle(&mut self, delta: isize) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Author => {
                self.author_index = wrap(self.author_index, delta, self.authors.len())
            }
            SearchField::Genre => {
                self.genre_index = wrap(self.genre_index, delta, self.genres.len())
            }
        }
    }

    /// Typing only edits the title field.
    pub fn input(&mut self, c: char) {
        if self.focus == SearchField::Title {
            self.title.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focus == SearchField::Title {
            self.title.pop();
        }
    }

    pub fn clear_title(&mut self) {
        self.title.clear();
    }

    pub fn selected_author(&self) -> &SelectOption {
        &self.authors[self.author_index]
    }

    pub fn selected_genre(&self) -> &SelectOption {
        &self.genres[self.genre_index]
    }

    /// The `{ title, author, genre }` submission as filter criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(
            &self.title,
            &self.selected_author().value,
            &self.selected_genre().value,
        )
    }
}

/// Settings overlay: just the theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    pub theme: ThemeName,
}

impl SettingsForm {
    pub fn new(theme: ThemeName) -> Self {
        Self { theme }
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggle();
    }
}

/// `any` first, then every entry sorted by display name.
fn build_options<'a, I>(any_label: &str, entries: I) -> Vec<SelectOption>
where
    I: Iterator<Item = (&'a String, &'a String)>,
{
    let mut named: Vec<SelectOption> = entries
        .map(|(id, name)| SelectOption {
            value: id.clone(),
            label: name.clone(),
        })
        .collect();
    named.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));

    let mut options = Vec::with_capacity(named.len() + 1);
    options.push(SelectOption {
        value: ANY.to_string(),
        label: any_label.to_string(),
    });
    options.extend(named);
    options
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((index as isize + delta) % len + len) % len) as usize
}
