pub mod detail_view;
pub mod form_view;
pub mod list_view;
pub mod projection;
pub mod theme;

use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{AppState, ViewMode};

/// Draw the whole screen. The list is always drawn; search, settings and the
/// detail overlay are painted on top of it when active.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let background = Block::default().style(theme::base_style(state.theme.scheme()));
    frame.render_widget(background, area);

    list_view::render(frame, state, area);

    match state.mode {
        ViewMode::Search => form_view::render_search(frame, state, area),
        ViewMode::Settings => form_view::render_settings(frame, state, area),
        ViewMode::Browse => {}
    }

    if state.overlay.is_open() {
        detail_view::render(frame, state, area);
    }
}

/// A rect `width_percent` wide and `height` rows tall, centred in `area`.
pub fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * width_percent.min(100) as u32 / 100) as u16;
    let width = width.max(20).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate a string to fit within `max_len` characters, appending ".." if
/// truncated.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else if max_len > 2 {
        let mut out: String = s.chars().take(max_len - 2).collect();
        out.push_str("..");
        out
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Dracula", 10), "Dracula");
        assert_eq!(truncate_str("Frankenstein", 8), "Franke..");
        assert_eq!(truncate_str("Émile", 4), "Ém..");
        assert_eq!(truncate_str("Emma", 2), "Em");
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 10, area);
        assert_eq!(r, Rect::new(20, 15, 60, 10));

        let tiny = Rect::new(0, 0, 10, 4);
        let r = centered_rect(60, 10, tiny);
        assert!(r.width <= tiny.width && r.height <= tiny.height);
    }
}
