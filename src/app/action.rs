use crate::app::state::ViewMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    ShowMore,
    CloseOverlay,
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    SearchNextField,
    SearchPrevField,
    SearchCycle(isize),
    SubmitSearch,
    CancelSearch,
    OpenSettings,
    ToggleTheme,
    SubmitSettings,
    CancelSettings,
}

/// Map a key event to an action based on the active surface.
pub fn map_key_to_action(key: KeyEvent, mode: ViewMode, overlay_open: bool) -> Option<Action> {
    // Only handle key press events to avoid duplicate events
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        ViewMode::Search => map_search_key(key),
        ViewMode::Settings => map_settings_key(key),
        ViewMode::Browse if overlay_open => map_overlay_key(key),
        ViewMode::Browse => map_browse_key(key),
    }
}

fn map_browse_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Char('m') | KeyCode::Char(' ') => Some(Action::ShowMore),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('s') => Some(Action::OpenSettings),
        _ => None,
    }
}

fn map_overlay_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseOverlay),
        _ => None,
    }
}

fn map_search_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(Action::SearchClear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::CancelSearch),
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Tab | KeyCode::Down => Some(Action::SearchNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::SearchPrevField),
        KeyCode::Left => Some(Action::SearchCycle(-1)),
        KeyCode::Right => Some(Action::SearchCycle(1)),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn map_settings_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CancelSettings),
        KeyCode::Enter => Some(Action::SubmitSettings),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
            Some(Action::ToggleTheme)
        }
        _ => None,
    }
}
