//! HTTP transport collaborator.
//!
//! The core never talks to the network directly; it hands a payload to an
//! [`ApiTransport`] and gets the raw response body back. [`ApiRequester`] is
//! the production implementation on top of `reqwest`.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::{DnsLookupError, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://www.whoisxmlapi.com/whoisserver/DNSService";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Flat request payload sent as query parameters. Absent optional fields are
/// omitted from the serialized form entirely.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub api_key: String,
    pub domain_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rr_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

/// Seam between request orchestration and the network. One call issues one
/// outbound request and returns the full response body.
pub trait ApiTransport {
    fn get(&self, payload: &RequestPayload) -> Result<String, DnsLookupError>;
}

/// Blocking HTTP requester for the lookup service.
///
/// Maps HTTP statuses onto the error taxonomy: 401/402/403 are auth
/// failures, 400/422 bad requests, anything else at 300 or above a generic
/// HTTP API error. No retries; the timeout is applied per request so it can
/// be adjusted after construction.
pub struct ApiRequester {
    client: reqwest::blocking::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiRequester {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Overrides the endpoint URL; `None` restores the default.
    pub fn set_base_url(&mut self, base_url: Option<&str>) {
        self.base_url = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

impl Default for ApiRequester {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

impl ApiTransport for ApiRequester {
    fn get(&self, payload: &RequestPayload) -> Result<String, DnsLookupError> {
        debug!(
            url = %self.base_url,
            domain = %payload.domain_name,
            "Sending lookup request"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(payload)
            .timeout(self.timeout)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        match status {
            401 | 402 | 403 => Err(DnsLookupError::ApiAuth(ServiceError::new(body))),
            400 | 422 => Err(DnsLookupError::BadRequest(ServiceError::new(body))),
            s if s >= 300 => Err(DnsLookupError::HttpApi { status: s }),
            _ => {
                debug!(response_len = body.len(), "Lookup response received");
                Ok(body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = RequestPayload {
            api_key: "at_0123456789abcdefghijklmnopqrs".to_string(),
            domain_name: "example.com".to_string(),
            rr_types: Some("_all".to_string()),
            output_format: Some("json".to_string()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "apiKey": "at_0123456789abcdefghijklmnopqrs",
                "domainName": "example.com",
                "type": "_all",
                "outputFormat": "json"
            })
        );
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = RequestPayload {
            api_key: "at_0123456789abcdefghijklmnopqrs".to_string(),
            domain_name: "example.com".to_string(),
            rr_types: None,
            output_format: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["apiKey", "domainName"]);
    }

    #[test]
    fn test_requester_defaults() {
        let requester = ApiRequester::default();
        assert_eq!(requester.base_url(), DEFAULT_BASE_URL);
        assert_eq!(requester.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_requester_overrides() {
        let mut requester = ApiRequester::default();
        requester.set_base_url(Some("https://localhost/DNSService"));
        assert_eq!(requester.base_url(), "https://localhost/DNSService");
        requester.set_base_url(None);
        assert_eq!(requester.base_url(), DEFAULT_BASE_URL);
        requester.set_timeout(Duration::from_secs(5));
        assert_eq!(requester.timeout(), Duration::from_secs(5));
    }
}
