//! Raw response panel
//!
//! Shows the last payload pretty-printed, scrollable from the keyboard

use super::super::state::DashboardState;
use crate::report::pretty_json;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_raw(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let (text, color) = match &state.raw_result {
        Some(raw) => (pretty_json(raw), Color::LightCyan),
        None => ("No response yet".to_string(), Color::DarkGray),
    };

    let title = match state.raw_line_count() {
        0 => "RAW RESPONSE".to_string(),
        lines => format!(
            "RAW RESPONSE [{}/{}]",
            (state.raw_scroll as usize + 1).min(lines),
            lines
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let raw = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(block)
        .scroll((state.raw_scroll, 0));
    f.render_widget(raw, area);
}
