//! Dashboard details panel component
//!
//! Renders backend information and the secondary fields of the last report

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use crate::environment::BackendSource;
use crate::report::OtxSummary;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn field<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Render the details panel.
pub fn render_details(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    let env_color = match state.environment.source {
        BackendSource::Default => Color::Green,
        _ => Color::Yellow,
    };
    lines.push(field(
        "Backend: ",
        state.environment.to_string(),
        env_color,
    ));
    lines.push(field(
        "Uptime: ",
        format_uptime(state.start_time.elapsed()),
        Color::LightGreen,
    ));
    lines.push(field(
        "Scans: ",
        state.scans_completed.to_string(),
        Color::LightYellow,
    ));

    if let Some(details) = &state.details {
        lines.push(Line::from(""));
        if let Some(domain) = &details.domain {
            lines.push(field("Domain: ", domain.clone(), Color::White));
        }
        if let Some(timestamp) = &details.timestamp {
            lines.push(field("Scanned: ", timestamp.clone(), Color::White));
        }
        if let Some(reputation) = &details.reputation {
            lines.push(field("Reputation: ", reputation.clone(), Color::LightCyan));
        }
        if !details.categories.is_empty() {
            let categories = details
                .categories
                .iter()
                .map(|(vendor, category)| format!("{}: {}", vendor, category))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(field("Categories: ", categories, Color::White));
        }

        match &details.otx {
            Some(OtxSummary::Pulses {
                count,
                related,
                reputation,
            }) => {
                lines.push(field("OTX pulses: ", count.to_string(), Color::LightMagenta));
                if !related.is_empty() {
                    lines.push(field("Related: ", related.join(", "), Color::White));
                }
                if let Some(reputation) = reputation {
                    lines.push(field("OTX reputation: ", reputation.clone(), Color::White));
                }
            }
            Some(OtxSummary::Failed(msg)) => {
                lines.push(field("OTX: ", msg.clone(), Color::LightRed));
            }
            None => {}
        }

        if let Some(id) = &details.record_id {
            lines.push(field("Record: ", id.clone(), Color::DarkGray));
        }
        if let Some(err) = &details.db_save_error {
            lines.push(field("Not saved: ", err.clone(), Color::LightRed));
        }
    }

    let block = Block::default()
        .title("DETAILS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
