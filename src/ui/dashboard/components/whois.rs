//! WHOIS panel

use super::super::state::DashboardState;
use crate::consts::cli_consts::display::WHOIS_UNAVAILABLE;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_whois(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let color = if state.whois == WHOIS_UNAVAILABLE {
        Color::DarkGray
    } else {
        Color::White
    };

    let block = Block::default()
        .title("WHOIS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let whois = Paragraph::new(state.whois.as_str())
        .style(Style::default().fg(color))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(whois, area);
}
