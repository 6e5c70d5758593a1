// Cluster list - left column, owns nothing but draws the selection

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false))
        .title(Line::styled(
            format!(" Clusters ({}) ", app.clusters.len()),
            Style::default().fg(theme.title),
        ));

    if !app.clusters_loaded {
        let message = match &app.cluster_error {
            Some(failure) => format!("✗ {}\n\n[r] retry", failure),
            None => format!("{} Loading clusters…", app.spinner_char()),
        };
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(theme.muted))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .clusters
        .iter()
        .map(|cluster| {
            let state_style = match cluster.state.as_str() {
                "Failed" => Style::default().fg(theme.severity_critical),
                "Succeeded" => Style::default().fg(theme.muted),
                _ => Style::default().fg(theme.severity_warning),
            };
            ListItem::new(Line::from(vec![
                Span::styled(cluster.name.clone(), Style::default().fg(theme.foreground)),
                Span::raw(" "),
                Span::styled(cluster.version.clone(), state_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
