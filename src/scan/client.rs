//! Threat-intelligence backend client
//!
//! A thin reqwest client for the backend's scan and health routes.

use crate::consts::cli_consts::backend::{
    SCAN_PATH, STATUS_PATH, connect_timeout, request_timeout,
};
use crate::scan::error::ScanError;
use crate::scan::{BackendStatus, ScanResponse, ThreatBackend};
use log::debug;
use reqwest::{Client, ClientBuilder, Response, Url};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidUrl`] if `base_url` is not an absolute http(s)
    /// URL, or a reqwest error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ScanError> {
        let base_url = normalize_base_url(base_url)?;
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout())
            .timeout(request_timeout())
            .build()?;
        Ok(Self { client, base_url })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn scan_url(&self, domain: &str) -> String {
        format!(
            "{}?domain={}",
            self.build_url(SCAN_PATH),
            urlencoding::encode(domain)
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ScanError> {
        if !response.status().is_success() {
            return Err(ScanError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(&self, url: &str) -> Result<(u16, Value), ScanError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let status = response.status().as_u16();
        let response_bytes = response.bytes().await?;
        let body = serde_json::from_slice(&response_bytes)?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl ThreatBackend for BackendClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn scan(&self, domain: &str) -> Result<ScanResponse, ScanError> {
        let (status, body) = self.get_request(&self.scan_url(domain)).await?;
        Ok(ScanResponse { status, body })
    }

    async fn status(&self) -> Result<BackendStatus, ScanError> {
        let (_, body) = self.get_request(&self.build_url(STATUS_PATH)).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Validate a backend origin and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ScanError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ScanError::InvalidUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
