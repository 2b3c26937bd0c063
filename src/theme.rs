// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use crate::editor::CounterSeverity;
use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub background: Color,
    pub title: Color,
    pub border: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Card colors
    pub card_title: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border_selected: Color,
    pub border_editing: Color,

    // Character counter ladder
    pub counter_calm: Color,
    pub counter_notice: Color,
    pub counter_warn: Color,
    pub counter_critical: Color,

    pub error: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "monokai" => Self::monokai(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Counter color for a severity step
    pub fn counter_color(&self, severity: CounterSeverity) -> Color {
        match severity {
            CounterSeverity::Calm => self.counter_calm,
            CounterSeverity::Notice => self.counter_notice,
            CounterSeverity::Warn => self.counter_warn,
            CounterSeverity::Critical => self.counter_critical,
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            title: Color::Cyan,
            border: Color::DarkGray,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            card_title: Color::White,
            text: Color::Reset,
            text_dim: Color::DarkGray,
            border_selected: Color::Cyan,
            border_editing: Color::Yellow,
            counter_calm: Color::DarkGray,
            counter_notice: Color::Yellow,
            counter_warn: Color::LightRed,
            counter_critical: Color::Red,
            error: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            title: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4), // comment
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            card_title: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            text: Color::Rgb(0xf8, 0xf8, 0xf2),   // foreground
            text_dim: Color::Rgb(0x62, 0x72, 0xa4), // comment
            border_selected: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            border_editing: Color::Rgb(0xff, 0x79, 0xc6), // pink
            counter_calm: Color::Rgb(0x62, 0x72, 0xa4), // comment
            counter_notice: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            counter_warn: Color::Rgb(0xff, 0xb8, 0x6c), // orange
            counter_critical: Color::Rgb(0xff, 0x55, 0x55), // red
            error: Color::Rgb(0xff, 0x55, 0x55),  // red
        }
    }

    /// Monokai Pro theme
    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            background: Color::Rgb(0x2d, 0x2a, 0x2e),
            title: Color::Rgb(0x78, 0xdc, 0xe8), // blue
            border: Color::Rgb(0x72, 0x70, 0x72), // dim gray
            status_bar: Color::Rgb(0xa9, 0xdc, 0x76), // green
            highlight: Color::Rgb(0xff, 0xd8, 0x66), // yellow
            card_title: Color::Rgb(0xab, 0x9d, 0xf2), // purple
            text: Color::Rgb(0xfc, 0xfc, 0xfa),  // foreground
            text_dim: Color::Rgb(0x72, 0x70, 0x72), // dim gray
            border_selected: Color::Rgb(0x78, 0xdc, 0xe8), // blue
            border_editing: Color::Rgb(0xff, 0x61, 0x88), // pink
            counter_calm: Color::Rgb(0x72, 0x70, 0x72), // dim gray
            counter_notice: Color::Rgb(0xff, 0xd8, 0x66), // yellow
            counter_warn: Color::Rgb(0xfc, 0x98, 0x67), // orange
            counter_critical: Color::Rgb(0xff, 0x61, 0x88), // pink
            error: Color::Rgb(0xff, 0x61, 0x88), // pink
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40), // polar night
            title: Color::Rgb(0x88, 0xc0, 0xd0),  // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a), // polar night light
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // green
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // yellow
            card_title: Color::Rgb(0x81, 0xa1, 0xc1), // frost blue
            text: Color::Rgb(0xec, 0xef, 0xf4),   // snow storm
            text_dim: Color::Rgb(0x61, 0x6e, 0x88), // muted blue-gray
            border_selected: Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
            border_editing: Color::Rgb(0xb4, 0x8e, 0xad), // purple
            counter_calm: Color::Rgb(0x61, 0x6e, 0x88), // muted blue-gray
            counter_notice: Color::Rgb(0xeb, 0xcb, 0x8b), // yellow
            counter_warn: Color::Rgb(0xd0, 0x87, 0x70), // orange
            counter_critical: Color::Rgb(0xbf, 0x61, 0x6e), // red
            error: Color::Rgb(0xbf, 0x61, 0x6e), // red
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            title: Color::Rgb(0x8e, 0xc0, 0x7c), // aqua
            border: Color::Rgb(0x92, 0x83, 0x74), // gray
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            card_title: Color::Rgb(0x83, 0xa5, 0x98), // blue
            text: Color::Rgb(0xeb, 0xdb, 0xb2),  // foreground
            text_dim: Color::Rgb(0x92, 0x83, 0x74), // gray
            border_selected: Color::Rgb(0x8e, 0xc0, 0x7c), // aqua
            border_editing: Color::Rgb(0xd3, 0x86, 0x9b), // purple
            counter_calm: Color::Rgb(0x92, 0x83, 0x74), // gray
            counter_notice: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            counter_warn: Color::Rgb(0xfe, 0x80, 0x19), // orange
            counter_critical: Color::Rgb(0xfb, 0x49, 0x34), // red
            error: Color::Rgb(0xfb, 0x49, 0x34), // red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("DRACULA").name, "dracula");
        assert_eq!(Theme::by_name("Nord").name, "nord");
    }

    #[test]
    fn test_unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
        assert_eq!(Theme::by_name("").name, "auto");
    }

    #[test]
    fn test_counter_colors_follow_severity() {
        let theme = Theme::gruvbox();
        assert_eq!(
            theme.counter_color(CounterSeverity::Calm),
            theme.counter_calm
        );
        assert_eq!(
            theme.counter_color(CounterSeverity::Critical),
            theme.counter_critical
        );
    }
}
