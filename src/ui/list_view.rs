use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::projection::PreviewItem;
use super::theme::{self, ColorScheme};
use super::truncate_str;
use crate::app::AppState;

/// Rows taken by one preview cell, borders included.
pub const ITEM_HEIGHT: u16 = 5;

/// Grid columns for a terminal `width` cells wide.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=79 => 1,
        80..=159 => 2,
        160..=239 => 4,
        _ => 8,
    }
}

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    // Layout: header, preview grid, show-more button, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Grid (takes remaining space)
            Constraint::Length(1), // Show more
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let scheme = state.theme.scheme();
    render_header(frame, state, chunks[0]);
    if state.catalog.has_results() {
        render_grid(frame, state, chunks[1]);
    } else {
        render_no_results(frame, scheme, chunks[1]);
    }
    render_show_more(frame, state, chunks[2]);
    render_status_line(frame, state, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let line = Line::from(vec![
        Span::styled(" folio ", theme::header_style(scheme)),
        Span::styled(
            format!(" {} books  ·  theme: {}", state.dataset.books.len(), state.theme.current()),
            theme::dim_style(scheme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme::base_style(scheme)), area);
}

fn render_grid(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let columns = grid_columns(area.width);
    state.columns = columns;

    let shown_len = state.catalog.shown().len();
    if state.cursor >= shown_len {
        state.cursor = shown_len.saturating_sub(1);
    }

    // Keep the highlighted row on screen
    let visible_rows = (area.height / ITEM_HEIGHT).max(1) as usize;
    let cursor_row = state.cursor / columns;
    if cursor_row < state.scroll_row {
        state.scroll_row = cursor_row;
    } else if cursor_row >= state.scroll_row + visible_rows {
        state.scroll_row = cursor_row + 1 - visible_rows;
    }

    let row_areas =
        Layout::vertical(vec![Constraint::Length(ITEM_HEIGHT); visible_rows]).split(area);
    let shown = state.catalog.shown();

    for (slot, row) in (state.scroll_row..).take(visible_rows).enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[slot]);
        for (col, cell) in cells.iter().enumerate() {
            let idx = row * columns + col;
            let Some(book) = shown.get(idx) else {
                return;
            };
            let item = PreviewItem::from_book(book, &state.dataset);
            render_preview(frame, &item, idx == state.cursor, scheme, *cell);
        }
    }
}

fn render_preview(
    frame: &mut Frame,
    item: &PreviewItem,
    selected: bool,
    scheme: ColorScheme,
    area: Rect,
) {
    let text_width = area.width.saturating_sub(2) as usize;
    let (block_style, title_style, dim_style) = if selected {
        let s = theme::selected_style(scheme);
        (s, s, s)
    } else {
        (
            theme::border_style(scheme),
            theme::title_style(scheme),
            theme::dim_style(scheme),
        )
    };

    let lines = vec![
        Line::from(Span::styled(truncate_str(&item.title, text_width), title_style)),
        Line::from(Span::styled(truncate_str(&item.author, text_width), dim_style)),
        Line::from(Span::styled(
            truncate_str(&format!("cover: {}", item.image), text_width),
            dim_style,
        )),
    ];

    let block = Block::bordered().border_style(block_style).style(block_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_no_results(frame: &mut Frame, scheme: ColorScheme, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No results found.", theme::title_style(scheme))),
        Line::from(Span::styled(
            "Your filters might be too narrow.",
            theme::dim_style(scheme),
        )),
    ];
    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(theme::base_style(scheme));
    frame.render_widget(message, area);
}

fn render_show_more(frame: &mut Frame, state: &AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let remaining = state.catalog.remaining();
    let button = Line::from(vec![
        Span::styled(" Show more ", theme::button_style(scheme, remaining > 0)),
        Span::styled(format!(" ({})", remaining), theme::dim_style(scheme)),
    ]);
    let button = Paragraph::new(button)
        .alignment(Alignment::Center)
        .style(theme::base_style(scheme));
    frame.render_widget(button, area);
}

fn render_status_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let status_text = format!(
        "  {}/{} shown  |  arrows/hjkl: move  Enter: details  m: more  /: search  s: settings  q: quit",
        state.catalog.shown().len(),
        state.catalog.matches().len(),
    );
    let status = Paragraph::new(Line::from(Span::styled(status_text, theme::dim_style(scheme))));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::forty_books;
    use crate::pagination::DEFAULT_PAGE_SIZE;
    use crate::ui::theme::{ThemeController, ThemeName};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, state, area);
            })
            .unwrap();
        screen_text(&terminal)
    }

    fn new_state() -> AppState {
        AppState::new(forty_books(), DEFAULT_PAGE_SIZE, ThemeController::new(ThemeName::Day))
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(200), 4);
        assert_eq!(grid_columns(300), 8);
    }

    #[test]
    fn test_renders_previews_and_remaining() {
        let mut state = new_state();
        let text = draw(&mut state, 100, 30);
        assert!(text.contains("Book Number 1"));
        assert!(text.contains("Ada Lovelace") || text.contains("Alan Turing"));
        assert!(text.contains("Show more"));
        assert!(text.contains("(4)"));
        assert!(!text.contains("No results found."));
        assert_eq!(state.columns, 2);
    }

    #[test]
    fn test_renders_no_results_message() {
        let mut state = new_state();
        state.search_form.title = "zzz-no-match".into();
        state.submit_search();
        let text = draw(&mut state, 100, 30);
        assert!(text.contains("No results found."));
        assert!(text.contains("(0)"));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = new_state();
        state.cursor = 35;
        draw(&mut state, 60, 18);
        // 15 grid rows fit three items, one column
        assert_eq!(state.scroll_row, 33);
    }
}
