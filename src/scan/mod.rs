//! Threat-intelligence backend access
//!
//! [`scan_domain`] is the only entry point the dashboard uses: it never fails,
//! every failure is folded into a [`ScanOutcome`].

use crate::error_classifier::ErrorClassifier;
use crate::report::ScanReport;
use crate::scan::error::{ScanError, error_text};
use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// A 2xx answer from the scan route.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResponse {
    pub status: u16,
    pub body: Value,
}

/// Health report from the backend's root route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendStatus {
    pub message: Option<String>,
    pub database_status: Option<String>,
    pub virustotal_status: Option<String>,
    pub alien_vault_status: Option<String>,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ThreatBackend: Send + Sync {
    /// Origin every request is sent to.
    fn base_url(&self) -> &str;

    /// Request a scan of `domain`. The domain is sent verbatim.
    async fn scan(&self, domain: &str) -> Result<ScanResponse, ScanError>;

    /// Fetch the backend health report.
    async fn status(&self) -> Result<BackendStatus, ScanError>;
}

/// Result of one scan submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The backend returned a report.
    Report(ScanReport),
    /// The backend answered with an error payload.
    Rejected {
        status: u16,
        message: String,
        payload: Value,
    },
    /// No usable answer: connection failure, timeout or unreadable body.
    Unreachable { message: String },
}

impl ScanOutcome {
    pub fn from_response(response: ScanResponse) -> Self {
        // The backend reports upstream failures with 200 and an `error` field.
        if let Some(message) = error_text(&response.body) {
            return ScanOutcome::Rejected {
                status: response.status,
                message,
                payload: response.body,
            };
        }
        ScanOutcome::Report(ScanReport::from_value(response.body))
    }

    pub fn from_error(error: ScanError) -> Self {
        let message = error.user_message();
        match error {
            ScanError::Http {
                status,
                payload: Some(payload),
                ..
            } => ScanOutcome::Rejected {
                status,
                message,
                payload,
            },
            _ => ScanOutcome::Unreachable { message },
        }
    }

    /// The outcome as a single JSON payload. Unreachable backends become `{"error": text}`.
    pub fn into_payload(self) -> Value {
        match self {
            ScanOutcome::Report(report) => report.raw,
            ScanOutcome::Rejected { payload, .. } => payload,
            ScanOutcome::Unreachable { message } => json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Report(_))
    }
}

/// Scan `domain` and fold every failure into the outcome.
pub async fn scan_domain(backend: &dyn ThreatBackend, domain: &str) -> ScanOutcome {
    debug!("Scanning '{}' via {}", domain, backend.base_url());
    match backend.scan(domain).await {
        Ok(response) => ScanOutcome::from_response(response),
        Err(e) => {
            let level = ErrorClassifier::new().classify_scan_error(&e);
            log::log!(log::Level::from(level), "Scan of '{}' failed: {}", domain, e);
            ScanOutcome::from_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::display::UNREACHABLE_MESSAGE;
    use mockall::predicate::eq;

    fn mock_backend() -> MockThreatBackend {
        let mut backend = MockThreatBackend::new();
        backend
            .expect_base_url()
            .return_const("http://backend.test".to_string());
        backend
    }

    #[tokio::test]
    async fn test_scan_domain_forwards_domain_once() {
        let mut backend = mock_backend();
        backend
            .expect_scan()
            .with(eq("example.com"))
            .times(1)
            .returning(|_| {
                Ok(ScanResponse {
                    status: 200,
                    body: json!({"whois": "Registrar: Example"}),
                })
            });

        let outcome = scan_domain(&backend, "example.com").await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_scan_domain_forwards_empty_domain_verbatim() {
        let mut backend = mock_backend();
        backend
            .expect_scan()
            .with(eq(""))
            .times(1)
            .returning(|_| {
                Ok(ScanResponse {
                    status: 200,
                    body: json!({}),
                })
            });

        scan_domain(&backend, "").await;
    }

    #[tokio::test]
    async fn test_error_field_in_success_body_is_rejection() {
        let mut backend = mock_backend();
        backend.expect_scan().returning(|_| {
            Ok(ScanResponse {
                status: 200,
                body: json!({"error": "VirusTotal API returned 401", "details": "bad key"}),
            })
        });

        match scan_domain(&backend, "example.com").await {
            ScanOutcome::Rejected {
                status,
                message,
                payload,
            } => {
                assert_eq!(status, 200);
                assert_eq!(message, "VirusTotal API returned 401");
                assert_eq!(payload["details"], "bad key");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_with_json_body_is_rejection() {
        let mut backend = mock_backend();
        backend.expect_scan().returning(|_| {
            Err(ScanError::Http {
                status: 404,
                message: "Domain not found".to_string(),
                payload: Some(json!({"error": "Domain not found"})),
            })
        });

        let outcome = scan_domain(&backend, "missing.example").await;
        assert!(matches!(
            &outcome,
            ScanOutcome::Rejected { status: 404, message, .. } if message == "Domain not found"
        ));
        assert_eq!(
            outcome.into_payload(),
            json!({"error": "Domain not found"})
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_error_payload() {
        let mut backend = mock_backend();
        backend.expect_scan().returning(|_| {
            Err(ScanError::Decode(
                serde_json::from_str::<Value>("<html>").unwrap_err(),
            ))
        });

        let outcome = scan_domain(&backend, "example.com").await;
        assert_eq!(
            outcome,
            ScanOutcome::Unreachable {
                message: UNREACHABLE_MESSAGE.to_string()
            }
        );
        assert_eq!(
            outcome.into_payload(),
            json!({"error": "Unable to connect to backend"})
        );
    }

    #[test]
    fn test_report_payload_is_unmodified() {
        let body = json!({"last_analysis_stats": {"malicious": 1}, "extra": [1, 2, 3]});
        let outcome = ScanOutcome::from_response(ScanResponse {
            status: 200,
            body: body.clone(),
        });
        assert_eq!(outcome.into_payload(), body);
    }
}
