//! Lookup client and request orchestration.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::{DnsLookupError, ServiceError};
use crate::model::Response;
use crate::transport::{
    ApiRequester, ApiTransport, RequestPayload, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
use crate::validation::{validate_api_key, validate_domain_name, OutputFormat};

/// Record-type filter requesting every record type the service knows.
pub const RR_TYPES_ALL: &str = "_all";

const AUTH_ERROR_CODE: &str = "API_KEY_05";
const RESTRICTED_ACCESS_MSG: &str =
    "Access restricted. Check credits balance or enter the correct API key.";
const MISSING_ROOT_MSG: &str = "Could not find the correct root element.";
const UNPARSABLE_MSG: &str = "Could not parse API response";

/// Client for the DNS lookup service.
///
/// Calls are synchronous and blocking: one call, one outbound request, full
/// response before parsing. The client keeps the most recent successful
/// [`Response`] and replaces it wholesale on each success; `&mut self` on
/// [`Client::get`] leaves concurrent callers to serialize access themselves.
#[derive(Debug)]
pub struct Client<T: ApiTransport = ApiRequester> {
    api_key: String,
    requester: T,
    last_result: Option<Response>,
}

/// Builder for a [`Client`] with a non-default endpoint or timeout.
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client, DnsLookupError> {
        let requester = ApiRequester::new(
            self.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        );
        Client::with_transport(&self.api_key, requester)
    }
}

impl Client {
    /// Creates a client against the default endpoint. Fails when the API key
    /// is malformed.
    pub fn new(api_key: &str) -> Result<Self, DnsLookupError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: &str) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.to_string(),
            base_url: None,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    /// Overrides the endpoint URL; `None` restores the default.
    pub fn set_base_url(&mut self, base_url: Option<&str>) {
        self.requester.set_base_url(base_url);
    }

    pub fn timeout(&self) -> Duration {
        self.requester.timeout()
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.requester.set_timeout(timeout);
    }
}

impl<T: ApiTransport> Client<T> {
    /// Creates a client over a custom transport. Fails when the API key is
    /// malformed.
    pub fn with_transport(api_key: &str, requester: T) -> Result<Self, DnsLookupError> {
        validate_api_key(api_key)?;
        Ok(Self {
            api_key: api_key.to_string(),
            requester,
            last_result: None,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: &str) -> Result<(), DnsLookupError> {
        validate_api_key(api_key)?;
        self.api_key = api_key.to_string();
        Ok(())
    }

    /// The most recent successful response, if any.
    pub fn last_result(&self) -> Option<&Response> {
        self.last_result.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.requester
    }

    /// Looks up `domain` and parses the response into a [`Response`].
    ///
    /// `rr_types` is a comma-separated record-type filter such as
    /// `"A,SOA,TXT"`, or [`RR_TYPES_ALL`]; `None` omits the filter and lets
    /// the service decide.
    pub fn get(
        &mut self,
        domain: &str,
        rr_types: Option<&str>,
    ) -> Result<Response, DnsLookupError> {
        let body = self.get_raw(domain, rr_types, OutputFormat::Json)?;
        let response = parse_response_body(&body)?;
        debug!(
            domain = %response.domain_name,
            records = response.dns_records.len(),
            "Lookup response parsed"
        );
        self.last_result = Some(response.clone());
        Ok(response)
    }

    /// Looks up `domain` and returns the raw response body. XML bodies are
    /// passed through unparsed.
    pub fn get_raw(
        &self,
        domain: &str,
        rr_types: Option<&str>,
        output_format: OutputFormat,
    ) -> Result<String, DnsLookupError> {
        if self.api_key.is_empty() {
            return Err(DnsLookupError::EmptyApiKey);
        }
        validate_domain_name(domain)?;

        let payload = RequestPayload {
            api_key: self.api_key.clone(),
            domain_name: domain.to_string(),
            rr_types: rr_types.map(str::to_string),
            output_format: Some(output_format.as_str().to_string()),
        };
        self.requester.get(&payload)
    }
}

/// Decodes a JSON response body and dispatches on its shape: `DNSData`
/// becomes a [`Response`], an `ErrorMessage` root becomes a response or auth
/// error, anything else is unparsable.
fn parse_response_body(body: &str) -> Result<Response, DnsLookupError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|source| DnsLookupError::UnparsableApiResponse {
            message: UNPARSABLE_MSG.to_string(),
            source: Some(source),
        })?;

    let Some(data) = parsed.get("DNSData") else {
        let error_code = parsed
            .pointer("/ErrorMessage/errorCode")
            .and_then(Value::as_str);
        if error_code == Some(AUTH_ERROR_CODE) {
            return Err(DnsLookupError::ApiAuth(ServiceError::new(
                RESTRICTED_ACCESS_MSG,
            )));
        }
        let message = parsed
            .pointer("/ErrorMessage/msg")
            .and_then(Value::as_str)
            .unwrap_or(MISSING_ROOT_MSG);
        return Err(DnsLookupError::Response(ServiceError::new(message)));
    };

    if data.get("domainName").is_none() {
        return Err(DnsLookupError::UnparsableApiResponse {
            message: MISSING_ROOT_MSG.to_string(),
            source: None,
        });
    }

    Response::from_value(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_root_with_message() {
        let err = parse_response_body(r#"{"ErrorMessage": {"msg": "X"}}"#).unwrap_err();
        match err {
            DnsLookupError::Response(detail) => assert_eq!(detail.message, "X"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_root_without_message_uses_fallback() {
        let err = parse_response_body(r#"{"unexpected": true}"#).unwrap_err();
        match err {
            DnsLookupError::Response(detail) => assert_eq!(detail.message, MISSING_ROOT_MSG),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_auth_error_code() {
        let body = r#"{"ErrorMessage": {"errorCode": "API_KEY_05", "msg": "denied"}}"#;
        let err = parse_response_body(body).unwrap_err();
        match err {
            DnsLookupError::ApiAuth(detail) => {
                assert_eq!(detail.message, RESTRICTED_ACCESS_MSG);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_error_code_is_response_error() {
        let body = r#"{"ErrorMessage": {"errorCode": "API_KEY_01", "msg": "bad key"}}"#;
        let err = parse_response_body(body).unwrap_err();
        match err {
            DnsLookupError::Response(detail) => assert_eq!(detail.message, "bad key"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_wraps_decode_error() {
        let err = parse_response_body("not json at all").unwrap_err();
        match err {
            DnsLookupError::UnparsableApiResponse { message, source } => {
                assert_eq!(message, UNPARSABLE_MSG);
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dns_data_without_domain_name() {
        let err = parse_response_body(r#"{"DNSData": {"dnsRecords": []}}"#).unwrap_err();
        match err {
            DnsLookupError::UnparsableApiResponse { message, source } => {
                assert_eq!(message, MISSING_ROOT_MSG);
                assert!(source.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_minimal_success_body() {
        let body = r#"{"DNSData": {"domainName": "example.com", "dnsRecords": []}}"#;
        let response = parse_response_body(body).unwrap();
        assert_eq!(response.domain_name, "example.com");
        assert!(response.dns_records.is_empty());
    }
}
