// Title bar component

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let loading = if app.clusters_loading || app.alerts.is_fetching() {
        format!(" {}", app.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" Cluster Alerts{} ──── {}", loading, app.source_label))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" v{} ", crate::config::VERSION)).right_aligned()),
        );

    f.render_widget(title, area);
}
