//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from key presses and
//! scan completions

use super::state::{DashboardState, InFlight, ScanPhase};

use crate::consts::cli_consts::RAW_SCROLL_PAGE;
use crate::consts::cli_consts::display::EMPTY_DOMAIN_PROMPT;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::logging::LogLevel;
use crate::scan::ScanOutcome;
use crate::workers::scanner::{ScanCompletion, ScanTicket};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{prompt}", prompt = EMPTY_DOMAIN_PROMPT)]
    EmptyDomain,
}

/// What the UI loop should do after a key press
#[derive(Debug)]
pub enum DashboardAction {
    None,
    /// Run this scan in the background
    Submit(ScanTicket),
    Quit,
}

impl DashboardState {
    /// Advance animations and apply queued completions.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(completion) = self.pending_completions.pop_front() {
            self.apply_completion(completion);
        }
    }

    /// Accept the current input as a new scan.
    ///
    /// Supersedes (and cancels) any scan still in flight. Prior stats, WHOIS and
    /// raw payload stay on screen until a response replaces them.
    ///
    /// # Errors
    /// [`SubmitError::EmptyDomain`] if the input is blank; no request is made.
    pub fn begin_scan(&mut self) -> Result<ScanTicket, SubmitError> {
        if self.domain.trim().is_empty() {
            self.error = Some(EMPTY_DOMAIN_PROMPT.to_string());
            return Err(SubmitError::EmptyDomain);
        }

        if let Some(previous) = self.in_flight.take() {
            previous.cancel.cancel();
            self.add_to_activity_log(Event::waiting(
                format!("Superseded scan of {}", previous.domain),
                LogLevel::Debug,
            ));
        }

        let token = self.next_token();
        let domain = self.domain.clone();
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            token,
            domain: domain.clone(),
            cancel: cancel.clone(),
        });

        self.loading = true;
        self.error = None;
        self.set_phase(ScanPhase::Scanning {
            domain: domain.clone(),
            started_at: Instant::now(),
        });
        self.add_to_activity_log(Event::scan_started(&domain));

        Ok(ScanTicket {
            token,
            domain,
            cancel,
        })
    }

    /// Apply a finished scan. Returns false if `token` is not the latest
    /// submission, in which case nothing changes but the activity log.
    pub fn apply_outcome(&mut self, token: u64, domain: &str, outcome: ScanOutcome) -> bool {
        if self.in_flight_token() != Some(token) {
            self.add_to_activity_log(Event::waiting(
                format!("Ignored stale response for {}", domain),
                LogLevel::Debug,
            ));
            return false;
        }
        self.in_flight = None;

        let level = ErrorClassifier::new().classify_outcome(&outcome);
        match outcome {
            ScanOutcome::Report(report) => {
                if let Some(stats) = report.stats {
                    self.stats = stats;
                }
                self.whois = report.whois_display().to_string();
                self.details = Some(report.details);
                self.raw_result = Some(report.raw);

                self.add_to_activity_log(Event::scan_succeeded(format!(
                    "Scan of {} complete: {} malicious, {} suspicious",
                    domain, self.stats.malicious, self.stats.suspicious
                )));
                self.set_phase(ScanPhase::Succeeded {
                    domain: domain.to_string(),
                });
            }
            ScanOutcome::Rejected {
                status,
                message,
                payload,
            } => {
                self.raw_result = Some(payload);
                self.add_to_activity_log(Event::scan_failed(
                    format!("Scan of {} rejected ({}): {}", domain, status, message),
                    level,
                ));
                self.error = Some(message);
                self.set_phase(ScanPhase::Failed {
                    domain: domain.to_string(),
                });
            }
            ScanOutcome::Unreachable { message } => {
                self.add_to_activity_log(Event::scan_failed(
                    format!("Scan of {} failed: {}", domain, message),
                    level,
                ));
                self.error = Some(message);
                self.set_phase(ScanPhase::Failed {
                    domain: domain.to_string(),
                });
            }
        }

        self.loading = false;
        self.raw_scroll = 0;
        self.scans_completed += 1;
        true
    }

    fn apply_completion(&mut self, completion: ScanCompletion) {
        let ScanCompletion {
            token,
            domain,
            outcome,
            elapsed,
        } = completion;
        if self.apply_outcome(token, &domain, outcome) {
            self.add_to_activity_log(Event::waiting(
                format!("Backend answered for {} in {} ms", domain, elapsed.as_millis()),
                LogLevel::Debug,
            ));
        }
    }

    /// Cancel the scan in flight, if any. Returns true if one was cancelled.
    pub fn cancel_scan(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        in_flight.cancel.cancel();
        self.loading = false;
        self.set_phase(ScanPhase::Idle);
        self.add_to_activity_log(Event::waiting(
            format!("Cancelled scan of {}", in_flight.domain),
            LogLevel::Info,
        ));
        true
    }

    /// Map a key press to a state change and an action for the UI loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.cancel_scan();
                DashboardAction::Quit
            }
            KeyCode::Char('u') if ctrl => {
                self.domain.clear();
                DashboardAction::None
            }
            KeyCode::Esc => {
                if self.cancel_scan() {
                    DashboardAction::None
                } else {
                    DashboardAction::Quit
                }
            }
            KeyCode::Enter => match self.begin_scan() {
                Ok(ticket) => DashboardAction::Submit(ticket),
                Err(_) => DashboardAction::None,
            },
            KeyCode::Backspace => {
                self.domain.pop();
                DashboardAction::None
            }
            KeyCode::Up => {
                self.scroll_raw_up(1);
                DashboardAction::None
            }
            KeyCode::Down => {
                self.scroll_raw_down(1);
                DashboardAction::None
            }
            KeyCode::PageUp => {
                self.scroll_raw_up(RAW_SCROLL_PAGE);
                DashboardAction::None
            }
            KeyCode::PageDown => {
                self.scroll_raw_down(RAW_SCROLL_PAGE);
                DashboardAction::None
            }
            KeyCode::Home => {
                self.raw_scroll = 0;
                DashboardAction::None
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.domain.push(c);
                DashboardAction::None
            }
            _ => DashboardAction::None,
        }
    }

    fn scroll_raw_up(&mut self, lines: u16) {
        self.raw_scroll = self.raw_scroll.saturating_sub(lines);
    }

    fn scroll_raw_down(&mut self, lines: u16) {
        let max = self.raw_line_count().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.raw_scroll = self.raw_scroll.saturating_add(lines).min(max);
    }
}
