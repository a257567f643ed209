use std::fmt;

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

/// The two colour presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Day,
    Night,
}

impl ThemeName {
    pub fn toggle(self) -> Self {
        match self {
            ThemeName::Day => ThemeName::Night,
            ThemeName::Night => ThemeName::Day,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Day => write!(f, "day"),
            ThemeName::Night => write!(f, "night"),
        }
    }
}

const NEAR_BLACK: Color = Color::Rgb(10, 10, 20);
const WHITE: Color = Color::Rgb(255, 255, 255);
const ACCENT: Color = Color::Rgb(0, 150, 255);

/// The two colour roles every style is derived from. `dark` is used for text
/// and `light` for backgrounds; the night preset swaps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub dark: Color,
    pub light: Color,
}

impl ColorScheme {
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Day => ColorScheme {
                dark: NEAR_BLACK,
                light: WHITE,
            },
            ThemeName::Night => ColorScheme {
                dark: WHITE,
                light: NEAR_BLACK,
            },
        }
    }
}

/// Holds the applied theme. Starts from the environment's preference and
/// only changes through [`ThemeController::apply_theme`].
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: ThemeName,
    scheme: ColorScheme,
}

impl ThemeController {
    pub fn new(theme: ThemeName) -> Self {
        Self {
            current: theme,
            scheme: ColorScheme::for_theme(theme),
        }
    }

    /// Read the dark-mode preference once through `lookup` (normally
    /// `std::env::var`) and pick the matching preset.
    pub fn from_environment<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = if prefers_dark(lookup) {
            ThemeName::Night
        } else {
            ThemeName::Day
        };
        debug!(%theme, "theme chosen from environment");
        Self::new(theme)
    }

    pub fn apply_theme(&mut self, theme: ThemeName) {
        self.current = theme;
        self.scheme = ColorScheme::for_theme(theme);
        debug!(%theme, "theme applied");
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }
}

/// Whether the host terminal asks for a dark palette.
///
/// `FOLIO_COLOR_SCHEME=dark|light` wins. Otherwise `COLORFGBG` (`"fg;bg"`, as
/// set by rxvt, Konsole and friends) is consulted: background colours 0-6 and
/// 8 are dark.
pub fn prefers_dark<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(scheme) = lookup("FOLIO_COLOR_SCHEME") {
        match scheme.trim().to_ascii_lowercase().as_str() {
            "dark" | "night" => return true,
            "light" | "day" => return false,
            _ => {}
        }
    }

    lookup("COLORFGBG")
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()))
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

pub fn base_style(scheme: ColorScheme) -> Style {
    Style::default().fg(scheme.dark).bg(scheme.light)
}

pub fn header_style(scheme: ColorScheme) -> Style {
    base_style(scheme).fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn title_style(scheme: ColorScheme) -> Style {
    base_style(scheme).add_modifier(Modifier::BOLD)
}

pub fn normal_style(scheme: ColorScheme) -> Style {
    base_style(scheme)
}

pub fn dim_style(scheme: ColorScheme) -> Style {
    base_style(scheme).fg(Color::Gray).add_modifier(Modifier::DIM)
}

pub fn selected_style(scheme: ColorScheme) -> Style {
    Style::default()
        .fg(scheme.light)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn border_style(scheme: ColorScheme) -> Style {
    base_style(scheme).fg(Color::DarkGray)
}

pub fn button_style(scheme: ColorScheme, enabled: bool) -> Style {
    if enabled {
        Style::default().fg(WHITE).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        dim_style(scheme)
    }
}

pub fn search_style(scheme: ColorScheme) -> Style {
    base_style(scheme).fg(Color::Green)
}
