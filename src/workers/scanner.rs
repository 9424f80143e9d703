//! Background scan dispatch
//!
//! Each submission runs as its own task and reports back over a channel.
//! Tasks stop early when their cancellation token fires.

use crate::scan::{ScanOutcome, ThreatBackend, scan_domain};
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A scan the dashboard has accepted and wants run.
#[derive(Debug, Clone)]
pub struct ScanTicket {
    /// Monotonic submission number; only the latest one is applied.
    pub token: u64,
    pub domain: String,
    pub cancel: CancellationToken,
}

/// A finished scan on its way back to the UI loop.
#[derive(Debug, Clone)]
pub struct ScanCompletion {
    pub token: u64,
    pub domain: String,
    pub outcome: ScanOutcome,
    pub elapsed: Duration,
}

/// Runs scans in the background and reports completions.
#[derive(Clone)]
pub struct ScanWorker {
    backend: Arc<dyn ThreatBackend>,
    completions: mpsc::Sender<ScanCompletion>,
}

impl ScanWorker {
    pub fn new(backend: Arc<dyn ThreatBackend>, completions: mpsc::Sender<ScanCompletion>) -> Self {
        Self {
            backend,
            completions,
        }
    }

    /// Start the scan described by `ticket`. Nothing is sent if it is cancelled first.
    pub fn dispatch(&self, ticket: ScanTicket) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let completions = self.completions.clone();

        tokio::spawn(async move {
            let started = Instant::now();
            tokio::select! {
                biased;
                _ = ticket.cancel.cancelled() => {
                    debug!("Scan #{} for '{}' cancelled", ticket.token, ticket.domain);
                }
                outcome = scan_domain(backend.as_ref(), &ticket.domain) => {
                    let completion = ScanCompletion {
                        token: ticket.token,
                        domain: ticket.domain,
                        outcome,
                        elapsed: started.elapsed(),
                    };
                    if let Err(e) = completions.send(completion).await {
                        debug!(
                            "Scan #{} for '{}' finished after the UI closed",
                            e.0.token, e.0.domain
                        );
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{MockThreatBackend, ScanResponse};
    use serde_json::json;

    fn ticket(token: u64, domain: &str) -> ScanTicket {
        ScanTicket {
            token,
            domain: domain.to_string(),
            cancel: CancellationToken::new(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_reports_completion() {
        let mut backend = MockThreatBackend::new();
        backend
            .expect_base_url()
            .return_const("http://backend.test".to_string());
        backend.expect_scan().times(1).returning(|_| {
            Ok(ScanResponse {
                status: 200,
                body: json!({"whois": "Registrar: Example"}),
            })
        });

        let (tx, mut rx) = mpsc::channel(4);
        let worker = ScanWorker::new(Arc::new(backend), tx);
        worker.dispatch(ticket(7, "example.com")).await.unwrap();

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.token, 7);
        assert_eq!(completion.domain, "example.com");
        assert!(completion.outcome.is_success());
    }

    #[tokio::test]
    async fn test_cancelled_ticket_sends_nothing() {
        let mut backend = MockThreatBackend::new();
        backend
            .expect_base_url()
            .return_const("http://backend.test".to_string());
        backend.expect_scan().returning(|_| {
            Ok(ScanResponse {
                status: 200,
                body: json!({}),
            })
        });

        let (tx, mut rx) = mpsc::channel(4);
        let worker = ScanWorker::new(Arc::new(backend), tx);
        let ticket = ticket(1, "example.com");
        ticket.cancel.cancel();
        worker.dispatch(ticket).await.unwrap();

        drop(worker);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_completion_after_receiver_closed_is_dropped_quietly() {
        let mut backend = MockThreatBackend::new();
        backend
            .expect_base_url()
            .return_const("http://backend.test".to_string());
        backend.expect_scan().times(1).returning(|_| {
            Ok(ScanResponse {
                status: 200,
                body: json!({}),
            })
        });

        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let worker = ScanWorker::new(Arc::new(backend), tx);

        // The task must finish normally rather than panic.
        assert!(worker.dispatch(ticket(3, "example.com")).await.is_ok());
    }
}
