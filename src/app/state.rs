use tracing::debug;

use super::catalog::CatalogState;
use super::forms::{SearchForm, SettingsForm};
use super::overlay::DetailOverlay;
use crate::bus::{Notification, NotificationBus};
use crate::model::Dataset;
use crate::ui::projection::BookDetail;
use crate::ui::theme::ThemeController;

/// Which surface receives key input. The detail overlay sits on top of
/// `Browse` and is tracked separately in [`AppState::overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Browse,
    Search,
    Settings,
}

/// Everything the browser knows. Owned by the event loop and handed to the
/// renderer by reference.
pub struct AppState {
    pub mode: ViewMode,
    pub dataset: Dataset,
    pub catalog: CatalogState,
    /// Index of the highlighted preview within `catalog.shown()`.
    pub cursor: usize,
    /// First grid row drawn; kept in sync with `cursor` by the list view.
    pub scroll_row: usize,
    /// Grid columns used by the last render, so vertical moves skip a row.
    pub columns: usize,
    pub overlay: DetailOverlay,
    pub search_form: SearchForm,
    pub settings_form: SettingsForm,
    pub theme: ThemeController,
    pub bus: NotificationBus,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(dataset: Dataset, page_size: usize, theme: ThemeController) -> Self {
        let catalog = CatalogState::new(&dataset, page_size);
        let search_form = SearchForm::new(&dataset);
        let settings_form = SettingsForm::new(theme.current());

        Self {
            mode: ViewMode::Browse,
            dataset,
            catalog,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            overlay: DetailOverlay::Closed,
            search_form,
            settings_form,
            theme,
            bus: NotificationBus::new(),
            should_quit: false,
        }
    }

    // -- browsing --

    pub fn move_left(&mut self) {
        self.move_cursor(-1);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(1);
    }

    pub fn move_up(&mut self) {
        self.move_cursor(-(self.columns.max(1) as isize));
    }

    pub fn move_down(&mut self) {
        self.move_cursor(self.columns.max(1) as isize);
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.catalog.shown().len();
        if len == 0 {
            return;
        }
        let next = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }

    /// Load the next page if there is one.
    pub fn show_more(&mut self) {
        if self.catalog.can_show_more() {
            self.catalog.advance();
        } else {
            debug!("show more ignored, nothing remaining");
        }
    }

    /// Id of the preview under the cursor.
    pub fn current_book_id(&self) -> Option<&str> {
        self.catalog.shown().get(self.cursor).map(|b| b.id.as_str())
    }

    /// Activate the highlighted preview. This only announces the selection;
    /// the overlay opens when the controller handles the notification.
    pub fn activate_current(&mut self) {
        if let Some(id) = self.current_book_id().map(str::to_string) {
            self.bus.publish(Notification::BookSelected(id));
        }
    }

    /// Handle everything published since the last call.
    pub fn process_notifications(&mut self) {
        if self.bus.is_empty() {
            return;
        }
        let pending: Vec<Notification> = self.bus.drain().collect();
        for notification in pending {
            self.handle_notification(notification);
        }
    }

    pub fn handle_notification(&mut self, notification: Notification) {
        match notification {
            Notification::BookSelected(id) => {
                self.select_book(&id);
            }
        }
    }

    /// Open the detail overlay for `id`. Ids outside the current matches are
    /// ignored and leave the overlay as it was.
    pub fn select_book(&mut self, id: &str) -> bool {
        let detail = match self.catalog.find(id) {
            Some(book) => BookDetail::from_book(book, &self.dataset),
            None => {
                debug!(id, "selection ignored, book not in current matches");
                return false;
            }
        };
        debug!(id, title = %detail.title, "book selected");
        self.overlay.open(detail);
        true
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close();
    }

    // -- search overlay --

    pub fn open_search(&mut self) {
        self.mode = ViewMode::Search;
    }

    pub fn cancel_search(&mut self) {
        self.mode = ViewMode::Browse;
    }

    /// Apply the search form, jump back to the top of the list and close the
    /// overlay.
    pub fn submit_search(&mut self) {
        let criteria = self.search_form.criteria();
        self.catalog.apply_filter(&self.dataset, &criteria);
        self.cursor = 0;
        self.scroll_row = 0;
        self.mode = ViewMode::Browse;
    }

    // -- settings overlay --

    pub fn open_settings(&mut self) {
        self.settings_form = SettingsForm::new(self.theme.current());
        self.mode = ViewMode::Settings;
    }

    pub fn cancel_settings(&mut self) {
        self.mode = ViewMode::Browse;
    }

    pub fn submit_settings(&mut self) {
        self.theme.apply_theme(self.settings_form.theme);
        self.mode = ViewMode::Browse;
    }
}
