use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;

/// Width of the label column in form rows.
const LABEL_WIDTH: u16 = 14;

/// Centers a `width` x `height` popup inside `area`, shrinking it to fit.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Clears the popup background and draws its border and title.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Body area of a rendered overlay (inside the border, above the hints).
pub struct OverlayLayout {
    pub body: Rect,
}

/// Renders a standard overlay container and returns its layout.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );
    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }
    let footer_height = u16::from(!config.hints.is_empty());
    OverlayLayout {
        body: Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.saturating_sub(footer_height),
        ),
    }
}

pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Hints shared by every form overlay.
pub const FORM_HINTS: [InputHint<'static>; 4] = [
    InputHint {
        key: "Tab",
        action: "next",
    },
    InputHint {
        key: "←/→",
        action: "adjust",
    },
    InputHint {
        key: "Enter",
        action: "save",
    },
    InputHint {
        key: "Esc",
        action: "cancel",
    },
];

/// Renders a centered line of key hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_area = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hints_area,
    );
}

/// One labelled value in a form.
pub struct FormRow<'a> {
    pub label: &'a str,
    pub value: String,
    pub focused: bool,
    /// Draw a text cursor after the value when focused.
    pub text: bool,
}

/// Renders form rows top to bottom, one line each; returns the rows used.
pub fn render_form_rows(frame: &mut Frame, area: Rect, rows: &[FormRow<'_>], accent: Color) -> u16 {
    let value_width = area.width.saturating_sub(LABEL_WIDTH + 1) as usize;
    let mut used = 0;
    for (i, row) in rows.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let label_style = if row.focused {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if row.focused { "› " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(accent)),
            Span::styled(
                format!("{:<width$}", row.label, width = (LABEL_WIDTH - 2) as usize),
                label_style,
            ),
            Span::raw(" "),
            Span::raw(truncate_with_ellipsis(
                &row.value,
                value_width.saturating_sub(1),
            )),
        ];
        if row.focused && row.text {
            spans.push(Span::styled("█", Style::default().fg(accent)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
        used += 1;
    }
    used
}
