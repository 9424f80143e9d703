//! Dashboard footer component
//!
//! Renders key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with key hints.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, loading: bool) {
    let footer_text = if loading {
        "[Enter] Rescan | [Esc] Cancel | [Ctrl+C] Quit"
    } else {
        "[Enter] Scan | [Ctrl+U] Clear | [Up/Down/PgUp/PgDn] Scroll raw | [Esc] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
