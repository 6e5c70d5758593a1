// Logs panel - tail of the in-memory log buffer

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible = area.height.saturating_sub(2) as usize;

    let title = format!(" Logs ({}) ", app.log_buffer.len());
    let lines: Vec<Line> = app
        .log_buffer
        .tail(visible)
        .into_iter()
        .map(|entry| Line::styled(entry.line(), Style::default().fg(theme.log_color(entry.level))))
        .collect();

    let logs = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(Line::styled(title, Style::default().fg(theme.title))),
    );

    f.render_widget(logs, area);
}
