// Alerts table - renders alert rows for one cluster
//
// Receives the raw payload and the selected cluster name; the payload shape
// is interpreted by `alerts::model`, not here.

use crate::alerts::model::alert_rows;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use serde_json::Value;

pub fn render(
    f: &mut Frame,
    area: Rect,
    item: &Value,
    cluster_name: &str,
    loading: Option<char>,
    theme: &Theme,
) {
    let rows = alert_rows(item);

    let mut title = if cluster_name.is_empty() {
        " Alerts ".to_string()
    } else {
        format!(" Alerts · {} ({}) ", cluster_name, rows.len())
    };
    if let Some(spinner) = loading {
        title.push_str(&format!("{} ", spinner));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .title(Line::styled(title, Style::default().fg(theme.title)));

    if rows.is_empty() {
        let message = if loading.is_some() {
            "Loading alerts…"
        } else {
            "No alerts"
        };
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(theme.muted))
                .block(block),
            area,
        );
        return;
    }

    // Fixed columns plus the summary, which takes what is left
    let summary_width = (area.width as usize).saturating_sub(10 + 28 + 26 + 8 + 6);

    let header = Row::new(["Severity", "Alert", "Namespace", "Status", "Summary"])
        .style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        );

    let table_rows = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.severity.clone()).style(theme.severity_style(row.severity_level())),
            Cell::from(super::truncate_to_width(&row.alertname, 28)),
            Cell::from(super::truncate_to_width(&row.namespace, 26)),
            Cell::from(row.status.clone()),
            Cell::from(super::truncate_to_width(&row.summary, summary_width)),
        ])
        .style(Style::default().fg(theme.foreground))
    });

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(10),
            Constraint::Length(28),
            Constraint::Length(26),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
