// Detail panel - the detail list's copy of the last fetched alerts
//
// Draws from `DetailView`, which is fed only through its update channel.
// It does not read the alerts controller.

use crate::alerts::model::{alert_rows, Severity};
use crate::tui::app::DetailView;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Counts per severity bucket: critical, warning, info/other
pub fn severity_counts(view: &DetailView) -> (usize, usize, usize) {
    alert_rows(&view.item)
        .iter()
        .fold((0, 0, 0), |(c, w, i), row| match row.severity_level() {
            Severity::Critical => (c + 1, w, i),
            Severity::Warning => (c, w + 1, i),
            Severity::Info | Severity::Unknown => (c, w, i + 1),
        })
}

pub fn render(f: &mut Frame, area: Rect, view: &DetailView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false))
        .title(Line::styled(" Detail ", Style::default().fg(theme.title)));

    if view.updates == 0 {
        f.render_widget(
            Paragraph::new("No alerts fetched yet")
                .style(Style::default().fg(theme.muted))
                .block(block),
            area,
        );
        return;
    }

    let (critical, warning, info) = severity_counts(view);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("● {} critical  ", critical), theme.severity_style(Severity::Critical)),
            Span::styled(format!("● {} warning  ", warning), theme.severity_style(Severity::Warning)),
            Span::styled(format!("● {} other", info), theme.severity_style(Severity::Info)),
        ]),
        Line::styled(
            format!("panel {} · update #{}", view.active_panel, view.updates),
            Style::default().fg(theme.muted),
        ),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::DetailUpdate;
    use serde_json::json;
    use tokio::sync::mpsc;

    #[test]
    fn counts_follow_received_updates() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = DetailView::new(rx);
        assert_eq!(severity_counts(&view), (0, 0, 0));

        tx.send(DetailUpdate {
            item: json!([
                {"alertname": "A", "severity": "critical"},
                {"alertname": "B", "severity": "warning"},
                {"alertname": "C", "severity": "none"},
                {"alertname": "D", "severity": "critical"}
            ]),
            active_panel: "ClusterAlerts".to_string(),
        })
        .unwrap();

        assert_eq!(view.drain(), 1);
        assert_eq!(severity_counts(&view), (2, 1, 1));
        assert_eq!(view.updates, 1);
    }
}
