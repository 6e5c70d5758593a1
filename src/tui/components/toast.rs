//! Toast notification component
//!
//! Short-lived confirmation (clipboard, refresh) drawn in the bottom-right
//! corner on top of everything else.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A notification that disappears after a fixed duration
pub struct Toast {
    /// Message to display
    pub message: String,
    /// When the toast was shown
    created_at: Instant,
}

impl Toast {
    /// Create a toast that expires after two seconds
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Whether the toast has been visible long enough to remove
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    /// Render in the bottom-right corner of `area`, clearing what is underneath
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
