// Overview panel - properties of the selected cluster

use crate::portal::Cluster;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn fields(cluster: &Cluster) -> [(&'static str, &str); 9] {
    [
        ("Name", cluster.name.as_str()),
        ("State", cluster.state.as_str()),
        ("Failed state", cluster.failed_state.as_str()),
        ("Version", cluster.version.as_str()),
        ("Subscription", cluster.subscription.as_str()),
        ("Resource group", cluster.resource_group.as_str()),
        ("Created", cluster.created_date.as_str()),
        ("Provisioned by", cluster.provisioned_by.as_str()),
        ("Console", cluster.console_link.as_str()),
    ]
}

pub fn render(f: &mut Frame, area: Rect, cluster: Option<&Cluster>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .title(Line::styled(" Overview ", Style::default().fg(theme.title)));

    let Some(cluster) = cluster else {
        f.render_widget(
            Paragraph::new("No cluster selected")
                .style(Style::default().fg(theme.muted))
                .block(block),
            area,
        );
        return;
    };

    let lines: Vec<Line> = fields(cluster)
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", label),
                    Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.to_string(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
