// Theme system for the TUI
//
// Two built-in palettes selected by name from config.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::alerts::model::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            ThemeKind::Light
        } else {
            ThemeKind::Dark
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Colors for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub highlight: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub error_bg: Color,
    pub error_fg: Color,

    pub severity_critical: Color,
    pub severity_warning: Color,
    pub severity_info: Color,

    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            highlight: Color::Yellow,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            error_bg: Color::Rgb(68, 10, 10),
            error_fg: Color::Rgb(254, 202, 202),

            severity_critical: Color::Red,
            severity_warning: Color::Yellow,
            severity_info: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,
            title: Color::Blue,
            highlight: Color::Magenta,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            error_bg: Color::Rgb(253, 231, 233),
            error_fg: Color::Rgb(164, 38, 44),

            severity_critical: Color::Red,
            severity_warning: Color::Rgb(184, 134, 11), // Dark goldenrod
            severity_info: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Critical => Style::default()
                .fg(self.severity_critical)
                .add_modifier(Modifier::BOLD),
            Severity::Warning => Style::default().fg(self.severity_warning),
            Severity::Info => Style::default().fg(self.severity_info),
            Severity::Unknown => Style::default().fg(self.muted),
        }
    }

    pub fn log_color(&self, level: tracing::Level) -> Color {
        match level {
            tracing::Level::ERROR => self.log_error,
            tracing::Level::WARN => self.log_warn,
            tracing::Level::INFO => self.log_info,
            _ => self.log_debug,
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_resolve() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
    }
}
