// UI rendering - called once per frame
//
// ┌ title ─────────────────────────────────────────────┐
// │ clusters          │ [Overview | Alerts]            │
// │                   │ error banner (when present)    │
// │                   │ active panel                   │
// │ detail            │                                │
// ├ logs ──────────────────────────────────────────────┤
// └ status ────────────────────────────────────────────┘

use super::app::{App, DetailTab};
use super::components::{
    alerts_table, cluster_list, detail_panel, error_banner, logs_panel, overview_panel, status_bar,
    title_bar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};

const LOG_LINES: u16 = 4;

pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(LOG_LINES + 2),
            Constraint::Length(3),
        ])
        .split(f.area());

    title_bar::render(f, rows[0], app);
    render_main(f, rows[1], app);
    logs_panel::render(f, rows[2], app);
    status_bar::render(f, rows[3], app);

    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
    app.clear_expired_toast();
}

fn render_main(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(columns[0]);

    cluster_list::render(f, left[0], app);
    detail_panel::render(f, left[1], &app.detail, &app.theme);
    render_tab_content(f, columns[1], app);
}

fn render_tab_content(f: &mut Frame, area: Rect, app: &App) {
    let banner_height = if app.tab == DetailTab::Alerts {
        error_banner::height(app.alerts.error())
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(banner_height),
            Constraint::Min(3),
        ])
        .split(area);

    let titles: Vec<Line> = DetailTab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();
    let selected = DetailTab::all()
        .iter()
        .position(|&t| t == app.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(app.theme.muted))
        .highlight_style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    match app.tab {
        DetailTab::Overview => {
            overview_panel::render(f, chunks[2], app.current_cluster(), &app.theme);
        }
        DetailTab::Alerts => {
            if let Some(error) = app.alerts.error() {
                error_banner::render(f, chunks[1], error, &app.theme);
            }
            let loading = app.alerts.is_fetching().then(|| app.spinner_char());
            let cluster_name = app
                .current_cluster()
                .map(|c| c.name.as_str())
                .unwrap_or("");
            alerts_table::render(
                f,
                chunks[2],
                app.alerts.data(),
                cluster_name,
                loading,
                &app.theme,
            );
        }
    }
}
