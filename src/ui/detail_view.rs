use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::centered_rect;
use super::theme;
use crate::app::AppState;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let detail = match state.overlay.detail() {
        Some(d) => d,
        None => return,
    };
    let scheme = state.theme.scheme();

    let mut lines = vec![
        Line::from(Span::styled(&detail.title, theme::title_style(scheme))),
        Line::from(Span::styled(&detail.subtitle, theme::dim_style(scheme))),
    ];
    if !detail.genres.is_empty() {
        lines.push(Line::from(Span::styled(
            detail.genres.join(" · "),
            theme::dim_style(scheme),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(&detail.description, theme::normal_style(scheme))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("cover: {}", detail.image),
        theme::dim_style(scheme),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Close (Esc) ", theme::button_style(scheme, true))));

    let popup = centered_rect(60, 16, area);
    let block = Block::bordered()
        .title(" Book ")
        .border_style(theme::header_style(scheme))
        .style(theme::base_style(scheme));
    let body = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
