//! Feature slices for the TUI, one per page (state/update/render per slice).

pub mod analytics;
pub mod comedians;
pub mod dashboard;
pub mod shows;
pub mod venues;

pub use analytics::AnalyticsState;
pub use comedians::ComediansState;
pub use dashboard::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
pub use shows::ShowsState;
pub use venues::VenuesState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

/// What a page key handler asks the reducer to do.
pub type KeyOutcome = (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>);

pub(crate) fn nothing() -> KeyOutcome {
    (Vec::new(), Vec::new(), None)
}

/// Height of a row of metric cards.
pub(crate) const CARD_HEIGHT: u16 = 4;

/// Renders equally sized "label / big value" cards side by side.
pub(crate) fn render_metric_cards(frame: &mut Frame, area: Rect, cards: &[(&str, String)]) {
    if cards.is_empty() {
        return;
    }
    let areas = Layout::horizontal(vec![Constraint::Fill(1); cards.len()]).split(area);
    for ((label, value), card_area) in cards.iter().zip(areas.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::styled(
                format!(" {label} "),
                Style::default().fg(Color::Gray),
            ));
        let value = Paragraph::new(Line::styled(
            value.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(value, *card_area);
    }
}

/// Bold page heading followed by a dim subtitle.
pub(crate) fn render_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
