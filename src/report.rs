//! Scan report model
//!
//! Typed view over the backend's scan payload. The payload itself is kept
//! verbatim in [`ScanReport::raw`]; every typed field is optional and lenient.

use crate::consts::cli_consts::display::{BACKEND_WHOIS_MISSING, WHOIS_UNAVAILABLE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Engine verdict counts from the last analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub harmless: u64,
    pub malicious: u64,
    pub suspicious: u64,
    pub undetected: u64,
}

impl AnalysisStats {
    /// Read counts from a `last_analysis_stats` object. Missing, negative or
    /// non-integer counts read as 0. Returns `None` if `value` is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let count = |key: &str| map.get(key).and_then(Value::as_u64).unwrap_or(0);
        Some(Self {
            harmless: count("harmless"),
            malicious: count("malicious"),
            suspicious: count("suspicious"),
            undetected: count("undetected"),
        })
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.harmless
            .saturating_add(self.malicious)
            .saturating_add(self.suspicious)
            .saturating_add(self.undetected)
    }
}

/// AlienVault OTX section of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtxSummary {
    Pulses {
        count: u64,
        related: Vec<String>,
        reputation: Option<String>,
    },
    /// The backend could not query OTX; holds its error text.
    Failed(String),
}

impl OtxSummary {
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        // The backend uses both "error" and "Error" here.
        if let Some(err) = map.get("error").or_else(|| map.get("Error")) {
            let mut msg = value_text(err);
            if let Some(details) = map.get("details") {
                msg = format!("{} ({})", msg, value_text(details));
            }
            return Some(OtxSummary::Failed(msg));
        }

        let related = map
            .get("related_pulses")
            .and_then(Value::as_array)
            .map(|pulses| pulses.iter().map(value_text).collect())
            .unwrap_or_default();

        Some(OtxSummary::Pulses {
            count: map
                .get("otx_pulse_count")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            related,
            reputation: map.get("reputation").map(value_text),
        })
    }
}

/// Secondary fields the backend attaches to a successful scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDetails {
    pub domain: Option<String>,
    pub timestamp: Option<String>,
    pub reputation: Option<String>,
    /// (vendor, category) pairs
    pub categories: Vec<(String, String)>,
    pub otx: Option<OtxSummary>,
    /// Storage id assigned by the backend
    pub record_id: Option<String>,
    pub db_save_error: Option<String>,
}

impl ReportDetails {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).map(value_text);

        let categories = value
            .get("categories")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(vendor, category)| (vendor.clone(), value_text(category)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            domain: text("domain"),
            timestamp: text("timestamp"),
            reputation: text("reputation"),
            categories,
            otx: value.get("alienvault_otx").and_then(OtxSummary::from_value),
            record_id: text("_id"),
            db_save_error: text("db_save_error"),
        }
    }
}

/// A successful scan response.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// `None` when the payload has no `last_analysis_stats` object.
    pub stats: Option<AnalysisStats>,
    /// `None` when WHOIS is absent, empty, or the backend's "Not available" marker.
    pub whois: Option<String>,
    pub details: ReportDetails,
    /// The payload exactly as received
    pub raw: Value,
}

impl ScanReport {
    pub fn from_value(raw: Value) -> Self {
        let stats = raw
            .get("last_analysis_stats")
            .and_then(AnalysisStats::from_value);

        // Only string WHOIS is displayed; objects and numbers read as missing.
        let whois = raw
            .get("whois")
            .and_then(Value::as_str)
            .filter(|w| !w.is_empty() && *w != BACKEND_WHOIS_MISSING)
            .map(str::to_string);

        Self {
            stats,
            whois,
            details: ReportDetails::from_value(&raw),
            raw,
        }
    }

    /// WHOIS text to display, falling back to the "no data" sentinel.
    pub fn whois_display(&self) -> &str {
        self.whois.as_deref().unwrap_or(WHOIS_UNAVAILABLE)
    }
}

/// Pretty-print a payload for verbatim display.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a JSON scalar without quotes; other values as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
