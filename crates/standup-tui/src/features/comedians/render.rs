use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use standup_core::format;

use crate::features::render_heading;
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let [heading, search, roster] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    render_heading(
        frame,
        heading,
        "🎤 Comedian Management",
        "a add • e edit • d delete • / search",
    );

    let state = &tui.comedians;
    let border = if state.searching {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let query = if state.search.is_empty() && !state.searching {
        Span::styled("Press / to search by name", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.search.clone())
    };
    let mut spans = vec![Span::raw("🔍 "), query];
    if state.searching {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Search Comedians "),
        ),
        search,
    );

    let matches = tui.session.store.search_comedians(&state.search);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Current Roster ({}) ", matches.len()));

    if matches.is_empty() {
        let message = if tui.session.store.comedians.is_empty() {
            "The roster is empty. Press a to add a comedian."
        } else {
            "No comedians match the search."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(message, Style::default().fg(Color::DarkGray)))
                .block(block),
            roster,
        );
        return;
    }

    let items: Vec<ListItem> = matches
        .iter()
        .map(|(_, comedian)| {
            ListItem::new(vec![
                Line::styled(
                    comedian.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format::stars(comedian.rating),
                    Style::default().fg(Color::Yellow),
                ),
                Line::from(vec![
                    Span::styled("Fee: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(format::dollars(u64::from(comedian.fee))),
                    Span::styled("  Specialty: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(comedian.specialty.clone()),
                ]),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));
    let mut list_state =
        ListState::default().with_selected(Some(state.selected.min(matches.len() - 1)));
    frame.render_stateful_widget(list, roster, &mut list_state);
}
