// Error banner - single-line, dismissible fetch failure
//
// Only drawn while the error slot holds a failure. Dismissal (x / Esc) is
// handled by the key dispatcher and clears nothing but that slot.

use crate::portal::FetchFailure;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height the banner needs; 0 when there is nothing to show
pub fn height(error: Option<&FetchFailure>) -> u16 {
    if error.is_some() {
        1
    } else {
        0
    }
}

pub fn banner_text(error: &FetchFailure) -> String {
    error.to_string()
}

pub fn render(f: &mut Frame, area: Rect, error: &FetchFailure, theme: &Theme) {
    let style = Style::default().fg(theme.error_fg).bg(theme.error_bg);
    let hint = " [x] dismiss ";
    let text_width = (area.width as usize).saturating_sub(hint.len() + 3);

    let line = Line::from(vec![
        Span::styled(" ✗ ", style.add_modifier(Modifier::BOLD)),
        Span::styled(
            super::truncate_to_width(&banner_text(error), text_width),
            style,
        ),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);

    if area.width as usize > hint.len() {
        let hint_area = Rect {
            x: area.right() - hint.len() as u16,
            width: hint.len() as u16,
            ..area
        };
        f.render_widget(
            Paragraph::new(hint).style(style.add_modifier(Modifier::DIM)),
            hint_area,
        );
    }
}
