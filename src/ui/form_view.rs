use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use super::theme::{self, ColorScheme, ThemeName};
use crate::app::forms::SearchField;
use crate::app::AppState;

pub fn render_search(frame: &mut Frame, state: &AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let form = &state.search_form;

    let title_input = Line::from(vec![
        field_label("Title  ", form.focus == SearchField::Title, scheme),
        Span::styled(&form.title, theme::search_style(scheme)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let author = Line::from(vec![
        field_label("Author ", form.focus == SearchField::Author, scheme),
        selector(&form.selected_author().label, scheme),
    ]);
    let genre = Line::from(vec![
        field_label("Genre  ", form.focus == SearchField::Genre, scheme),
        selector(&form.selected_genre().label, scheme),
    ]);
    let help = Line::from(Span::styled(
        "Tab: next field  ←/→: change  Enter: search  Esc: cancel",
        theme::dim_style(scheme),
    ));

    let lines = vec![title_input, Line::from(""), author, genre, Line::from(""), help];
    draw_popup(frame, " Search ", lines, scheme, area);
}

pub fn render_settings(frame: &mut Frame, state: &AppState, area: Rect) {
    let scheme = state.theme.scheme();
    let selected = state.settings_form.theme;

    let option = |name: ThemeName| {
        let label = format!(" {} ", name);
        if name == selected {
            Span::styled(label, theme::selected_style(scheme))
        } else {
            Span::styled(label, theme::normal_style(scheme))
        }
    };

    let lines = vec![
        Line::from(vec![
            field_label("Theme  ", true, scheme),
            option(ThemeName::Day),
            Span::raw(" "),
            option(ThemeName::Night),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "←/→: change  Enter: save  Esc: cancel",
            theme::dim_style(scheme),
        )),
    ];
    draw_popup(frame, " Settings ", lines, scheme, area);
}

fn field_label(label: &str, focused: bool, scheme: ColorScheme) -> Span<'static> {
    let style = if focused {
        theme::header_style(scheme)
    } else {
        theme::dim_style(scheme)
    };
    let marker = if focused { "> " } else { "  " };
    Span::styled(format!("{}{}", marker, label), style)
}

fn selector(label: &str, scheme: ColorScheme) -> Span<'static> {
    Span::styled(format!("< {} >", label), theme::normal_style(scheme))
}

fn draw_popup(frame: &mut Frame, title: &str, lines: Vec<Line>, scheme: ColorScheme, area: Rect) {
    let height = lines.len() as u16 + 2;
    let popup = centered_rect(50, height, area);
    let block = Block::bordered()
        .title(title.to_string())
        .border_style(theme::header_style(scheme))
        .style(theme::base_style(scheme));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
