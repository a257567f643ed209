use crate::ui::projection::BookDetail;

/// The detail overlay. Re-opening while open just swaps the displayed book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(BookDetail),
}

impl DetailOverlay {
    pub fn open(&mut self, detail: BookDetail) {
        *self = DetailOverlay::Open(detail);
    }

    pub fn close(&mut self) {
        *self = DetailOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open(_))
    }

    pub fn detail(&self) -> Option<&BookDetail> {
        match self {
            DetailOverlay::Open(detail) => Some(detail),
            DetailOverlay::Closed => None,
        }
    }
}
