// Status bar component
//
// Fetch phase, cluster count, uptime and key hints.

use crate::alerts::FetchPhase;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINTS: &str = "↑↓ cluster · Tab panel · r refresh · x dismiss · y copy · q quit";

pub fn phase_text(phase: &FetchPhase, spinner: char) -> String {
    match phase {
        FetchPhase::InFlight(_) => format!("{} {}", spinner, phase.label()),
        _ => phase.label(),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = format!(
        " {} │ {} clusters │ alerts: {} │ {}",
        app.uptime(),
        app.clusters.len(),
        phase_text(app.alerts.phase(), app.spinner_char()),
        KEY_HINTS,
    );

    let status = Paragraph::new(text)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(false)),
        );

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::gate::RequestTag;

    #[test]
    fn in_flight_phase_gets_spinner() {
        let phase = FetchPhase::InFlight(RequestTag {
            seq: 3,
            cluster: "prod-1".to_string(),
        });
        assert_eq!(phase_text(&phase, '◐'), "◐ fetching prod-1");
        assert_eq!(phase_text(&FetchPhase::Idle, '◐'), "idle");
        assert_eq!(
            phase_text(&FetchPhase::Done("prod-1".to_string()), '◐'),
            "loaded prod-1"
        );
    }
}
