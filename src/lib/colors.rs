//! Theme and color palette definitions for the widgets.

use std::fmt;

use ratatui::style::{Color, palette::tailwind};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Background behind every widget
    pub buffer_bg: Color,
    /// Background of table header rows
    pub header_bg: Color,
    /// Foreground of table header rows
    pub header_fg: Color,
    /// Regular text
    pub text: Color,
    /// Labels above input fields
    pub label: Color,
    /// Placeholder, helper text and empty/loading placeholders
    pub muted: Color,
    /// Error messages and invalid fields
    pub error: Color,
    /// Border of unfocused inputs
    pub border: Color,
    /// Border of the focused widget
    pub focus_border: Color,
    /// Fill used by the "filled" input variant
    pub fill_bg: Color,
    /// Background of selected table rows
    pub selected_row_bg: Color,
    /// Foreground of the row under the cursor
    pub cursor_row_fg: Color,
    /// Dimmed foreground for disabled inputs
    pub disabled: Color,
    /// Foreground of inputs in the loading state
    pub loading: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                header_bg: color.c900,
                header_fg: tailwind::SLATE.c200,
                text: tailwind::SLATE.c200,
                label: color.c400,
                muted: tailwind::SLATE.c500,
                error: tailwind::RED.c500,
                border: tailwind::SLATE.c600,
                focus_border: color.c500,
                fill_bg: tailwind::SLATE.c800,
                selected_row_bg: color.c950,
                cursor_row_fg: color.c300,
                disabled: tailwind::SLATE.c700,
                loading: tailwind::AMBER.c500,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                header_bg: color.c900,
                header_fg: Color::White,
                text: Color::White,
                label: color.c400,
                muted: Color::Gray,
                error: Color::Red,
                border: Color::Gray,
                focus_border: color.c500,
                fill_bg: Color::DarkGray,
                selected_row_bg: Color::DarkGray,
                cursor_row_fg: color.c400,
                disabled: Color::DarkGray,
                loading: Color::Yellow,
            }
        }
    }

    /// Creates a palette for `theme`, detecting whether stdout supports true
    /// color.
    pub fn detect(theme: Theme) -> Self {
        let true_color_enabled =
            match supports_color::on(supports_color::Stream::Stdout) {
                Some(support) => support.has_16m,
                _ => false,
            };
        Self::new(theme.to_palette(true_color_enabled), true_color_enabled)
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(Theme::Blue.to_palette(true), true)
    }
}

/// Available color themes.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub enum Theme {
    /// Blue accents
    #[default]
    Blue,
    /// Emerald accents
    Emerald,
    /// Indigo accents
    Indigo,
    /// Red accents
    Red,
}

/// Every theme in cycling order.
pub const THEMES: [Theme; 4] =
    [Theme::Blue, Theme::Emerald, Theme::Indigo, Theme::Red];

const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE_PALETTE: tailwind::Palette =
    basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_RED_PALETTE: tailwind::Palette =
    basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALETTE: tailwind::Palette =
    basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALETTE: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Blue => write!(f, "Blue"),
            Theme::Emerald => write!(f, "Emerald"),
            Theme::Indigo => write!(f, "Indigo"),
            Theme::Red => write!(f, "Red"),
        }
    }
}

impl Theme {
    /// Parses a theme from its string name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        match value {
            "Blue" => Theme::Blue,
            "Emerald" => Theme::Emerald,
            "Indigo" => Theme::Indigo,
            "Red" => Theme::Red,
            _ => Theme::Blue,
        }
    }

    /// Returns the theme following this one, wrapping around.
    pub fn next(self) -> Theme {
        let idx = THEMES.iter().position(|t| *t == self).unwrap_or(0);
        THEMES[(idx + 1) % THEMES.len()]
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALETTE,
                Theme::Red => &BASIC_RED_PALETTE,
                Theme::Indigo => &BASIC_MAGENTA_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
