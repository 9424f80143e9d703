//! Error handling for the scan module

use crate::consts::cli_consts::display::{FALLBACK_ERROR_MESSAGE, UNREACHABLE_MESSAGE};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The configured backend origin is not an absolute http(s) URL.
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `payload` holds the body when it was a JSON object.
    #[error("HTTP error with status {status}: {message}")]
    Http {
        status: u16,
        message: String,
        payload: Option<Value>,
    },
}

impl ScanError {
    pub async fn from_response(response: reqwest::Response) -> ScanError {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        match serde_json::from_str::<Value>(&text) {
            Ok(payload) if payload.is_object() => ScanError::Http {
                status,
                message: error_text(&payload)
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
                payload: Some(payload),
            },
            _ => ScanError::Http {
                status,
                message: text,
                payload: None,
            },
        }
    }

    /// True when the backend could not be reached or its answer could not be read.
    pub fn is_unreachable(&self) -> bool {
        match self {
            ScanError::Reqwest(_) | ScanError::Decode(_) => true,
            ScanError::Http { payload, .. } => payload.is_none(),
            ScanError::InvalidUrl { .. } => false,
        }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ScanError::Http {
                message,
                payload: Some(_),
                ..
            } => message.clone(),
            ScanError::InvalidUrl { .. } => self.to_string(),
            _ => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// The `error` field of a backend payload, if it carries one.
pub fn error_text(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_text_reads_string_field() {
        let payload = json!({"error": "VirusTotal API returned 404", "details": "nope"});
        assert_eq!(
            error_text(&payload).as_deref(),
            Some("VirusTotal API returned 404")
        );
    }

    #[test]
    fn test_error_text_ignores_missing_null_and_empty() {
        assert_eq!(error_text(&json!({"whois": "x"})), None);
        assert_eq!(error_text(&json!({"error": null})), None);
        assert_eq!(error_text(&json!({"error": ""})), None);
    }

    #[test]
    fn test_error_text_stringifies_non_string_values() {
        let payload = json!({"error": {"code": 7}});
        assert_eq!(error_text(&payload).as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_user_message_for_json_error_is_verbatim() {
        let err = ScanError::Http {
            status: 404,
            message: "Domain not found".to_string(),
            payload: Some(json!({"error": "Domain not found"})),
        };
        assert_eq!(err.user_message(), "Domain not found");
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_non_json_http_error_counts_as_unreachable() {
        let err = ScanError::Http {
            status: 502,
            message: "<html>Bad Gateway</html>".to_string(),
            payload: None,
        };
        assert!(err.is_unreachable());
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_decode_error_counts_as_unreachable() {
        let err: ScanError = serde_json::from_str::<Value>("not json").unwrap_err().into();
        assert!(err.is_unreachable());
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }
}
