//! Analysis stats tiles

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render one tile per verdict count.
pub fn render_stats(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let tiles = [
        ("Malicious", state.stats.malicious, Color::LightRed),
        ("Suspicious", state.stats.suspicious, Color::Yellow),
        ("Harmless", state.stats.harmless, Color::Green),
        ("Undetected", state.stats.undetected, Color::Gray),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, count, color), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let tile = Paragraph::new(vec![Line::from(count.to_string())])
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(tile, *chunk);
    }
}
