//! Domain input component
//!
//! Renders the search field, the submit label and the error line

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the domain input row.
pub fn render_input(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(15)])
        .split(area);

    let mut spans = vec![Span::styled(
        state.domain.clone(),
        Style::default().fg(Color::White),
    )];
    // Blinking cursor
    if (state.tick / 5) % 2 == 0 {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    if let Some(error) = &state.error {
        spans.push(Span::styled(
            format!("   {}", error),
            Style::default().fg(Color::LightRed),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("DOMAIN")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if state.error.is_some() {
                Color::LightRed
            } else {
                Color::Cyan
            })),
    );
    f.render_widget(input, chunks[0]);

    let (label, color) = if state.loading {
        ("Scanning...", Color::DarkGray)
    } else {
        ("Scan", Color::LightGreen)
    };
    let button = Paragraph::new(label)
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(button, chunks[1]);
}
