//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventType;
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an activity log entry based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::LightRed,
        EventType::Refresh => Color::Cyan,
        EventType::Waiting => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Format an elapsed duration as `1d 2h 3m`, `2h 3m 4s` or `3m 4s`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
