//! Headless mode execution
//!
//! One-shot commands that print to the console instead of drawing the dashboard.

use super::SessionData;
use crate::cli_messages::print_success;
use crate::report::{OtxSummary, pretty_json};
use crate::scan::{ThreatBackend, scan_domain};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::time::Instant;

/// Scan a single domain and print the result.
///
/// The response goes through the same state transitions as the dashboard, so
/// the printed stats and WHOIS are exactly what the dashboard would show.
///
/// # Errors
/// Fails when the input is blank, the backend rejects the scan or cannot be reached,
/// or the scan is interrupted with Ctrl+C.
pub async fn run_headless_scan(
    session: SessionData,
    domain: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut state = DashboardState::new(
        session.environment.clone(),
        Instant::now(),
        UIConfig::new(false),
    );
    state.domain = domain.to_string();
    let ticket = match state.begin_scan() {
        Ok(ticket) => ticket,
        Err(e) => {
            print_cmd_error!("Nothing to scan", e.to_string().as_str());
            return Err(e.into());
        }
    };

    if !json {
        print_cmd_info!("Scanning", "{} via {}", ticket.domain, session.environment);
    }

    let outcome = tokio::select! {
        outcome = scan_domain(session.backend.as_ref(), &ticket.domain) => outcome,
        _ = tokio::signal::ctrl_c() => {
            state.cancel_scan();
            return Err("Scan interrupted".into());
        }
    };
    let succeeded = outcome.is_success();
    let payload = json.then(|| outcome.clone().into_payload());
    state.apply_outcome(ticket.token, &ticket.domain, outcome);

    if let Some(payload) = payload {
        println!("{}", pretty_json(&payload));
    } else if succeeded {
        print_report(&state);
    } else if let Some(raw) = &state.raw_result {
        print_cmd_warn!("Backend response", "{}", raw);
    }

    match state.error {
        Some(message) if !succeeded => {
            print_cmd_error!("Scan failed", message.as_str());
            Err(message.into())
        }
        _ => Ok(()),
    }
}

fn print_report(state: &DashboardState) {
    print_cmd_success!("Scan complete", "{}", state.domain);
    println!("Malicious: {}", state.stats.malicious);
    println!("Suspicious: {}", state.stats.suspicious);
    println!("Harmless: {}", state.stats.harmless);
    println!("Undetected: {}", state.stats.undetected);
    println!("Engines: {}", state.stats.total());

    if let Some(details) = &state.details {
        if let Some(reputation) = &details.reputation {
            println!("Reputation: {}", reputation);
        }
        for (vendor, category) in &details.categories {
            println!("Category: {} ({})", category, vendor);
        }
        match &details.otx {
            Some(OtxSummary::Pulses { count, .. }) => println!("OTX pulses: {}", count),
            Some(OtxSummary::Failed(msg)) => println!("OTX: {}", msg),
            None => {}
        }
        if let Some(err) = &details.db_save_error {
            print_cmd_warn!("Result not saved", "{}", err);
        }
    }

    println!();
    println!("WHOIS:");
    println!("{}", state.whois);
}

/// Query the backend's health route and print what it reports.
///
/// # Errors
/// Fails if the backend cannot be reached or answers with an error.
pub async fn run_status(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Backend", "{}", session.environment);

    let status = match session.backend.status().await {
        Ok(status) => status,
        Err(e) => {
            print_cmd_error!("Backend unavailable", e.user_message().as_str());
            return Err(e.into());
        }
    };

    print_success("Backend reachable", status.message.as_deref().unwrap_or_default());
    let rows = [
        ("Database", &status.database_status),
        ("VirusTotal", &status.virustotal_status),
        ("AlienVault OTX", &status.alien_vault_status),
    ];
    for (name, value) in rows {
        if let Some(value) = value {
            println!("{}: {}", name, value);
        }
    }
    Ok(())
}
