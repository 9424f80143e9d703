//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::display::WHOIS_UNAVAILABLE;
use crate::environment::Environment;
use crate::events::Event;
use crate::report::{AnalysisStats, ReportDetails};
use crate::ui::UIConfig;
use crate::workers::scanner::ScanCompletion;

use serde_json::Value;
use std::collections::VecDeque;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Where the current or last submission stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning { domain: String, started_at: Instant },
    Succeeded { domain: String },
    Failed { domain: String },
}

/// The submission whose response will be applied.
#[derive(Debug)]
pub(super) struct InFlight {
    pub token: u64,
    pub domain: String,
    pub cancel: CancellationToken,
}

/// Dashboard state: the scan form, the last results and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// Resolved backend origin and where it came from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Domain input text
    pub domain: String,
    /// Counters from the last response that carried them
    pub stats: AnalysisStats,
    /// WHOIS text, or the "no data" sentinel
    pub whois: String,
    /// Last raw payload received, success or error
    pub raw_result: Option<Value>,
    /// Secondary fields of the last successful report
    pub details: Option<ReportDetails>,
    pub loading: bool,
    /// User-visible error for the last submission
    pub error: Option<String>,

    /// Completions waiting to be applied
    pub pending_completions: VecDeque<ScanCompletion>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Scroll offset of the raw response panel, in lines
    pub raw_scroll: u16,
    /// Animation tick counter
    pub tick: usize,
    /// Number of responses applied
    pub scans_completed: u64,

    phase: ScanPhase,
    last_token: u64,
    pub(super) in_flight: Option<InFlight>,
}

impl DashboardState {
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            domain: String::new(),
            stats: AnalysisStats::default(),
            whois: WHOIS_UNAVAILABLE.to_string(),
            raw_result: None,
            details: None,
            loading: false,
            error: None,
            pending_completions: VecDeque::new(),
            activity_logs: VecDeque::new(),
            raw_scroll: 0,
            tick: 0,
            scans_completed: 0,
            phase: ScanPhase::Idle,
            last_token: 0,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub(super) fn set_phase(&mut self, phase: ScanPhase) {
        self.phase = phase;
    }

    /// Mint the token for a new submission.
    pub(super) fn next_token(&mut self) -> u64 {
        self.last_token += 1;
        self.last_token
    }

    /// Token of the submission whose response would be applied, if any.
    pub fn in_flight_token(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.token)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue a finished scan for the next update
    pub fn add_completion(&mut self, completion: ScanCompletion) {
        self.pending_completions.push_back(completion);
    }

    /// Number of lines in the pretty-printed raw payload.
    pub fn raw_line_count(&self) -> usize {
        self.raw_result
            .as_ref()
            .map(|raw| crate::report::pretty_json(raw).lines().count())
            .unwrap_or(0)
    }
}
