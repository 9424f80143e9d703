//! Dashboard header component
//!
//! Renders the title and scan progress gauge

use super::super::state::{DashboardState, ScanPhase};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and scan progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("THREAT INTEL DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = match state.phase() {
        ScanPhase::Scanning { domain, started_at } => {
            // Loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!(
                    "SCANNING - {} ({}s)",
                    domain,
                    started_at.elapsed().as_secs()
                ),
                Color::LightYellow,
                progress,
            )
        }
        ScanPhase::Succeeded { domain } => {
            (format!("DONE - {}", domain), Color::LightGreen, 100)
        }
        ScanPhase::Failed { domain } => (format!("FAILED - {}", domain), Color::LightRed, 100),
        ScanPhase::Idle => ("READY - Enter a domain".to_string(), Color::LightBlue, 100),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
