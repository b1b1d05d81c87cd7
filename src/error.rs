//! Error taxonomy for lookup calls.
//!
//! Local validation failures and remote-service failures are distinct
//! variants; nothing is retried or silently downgraded at this layer.

use thiserror::Error;

use crate::model::ErrorMessage;

#[derive(Error, Debug)]
pub enum DnsLookupError {
    /// Malformed API key, domain name or output format. Raised before any
    /// network call.
    #[error("{0}")]
    Parameter(String),

    /// API key was empty at call time.
    #[error("API key is empty")]
    EmptyApiKey,

    /// The decoded response lacks the success root and carries a
    /// service-reported message.
    #[error("{}", .0.message)]
    Response(ServiceError),

    /// The service reported a credential or credit problem.
    #[error("{}", .0.message)]
    ApiAuth(ServiceError),

    /// The service rejected the request as malformed (HTTP 400/422).
    #[error("{}", .0.message)]
    BadRequest(ServiceError),

    /// Any other non-success HTTP status.
    #[error("Unexpected HTTP response status {status}")]
    HttpApi { status: u16 },

    /// The body was not valid JSON, or an expected inner key was missing.
    #[error("{message}")]
    UnparsableApiResponse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Connectivity failure from the HTTP collaborator.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DnsLookupError {
    /// Structured service message, when the response-derived error carried
    /// one and its secondary parse succeeded.
    pub fn parsed_message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::Response(detail) | Self::ApiAuth(detail) | Self::BadRequest(detail) => {
                detail.parsed.as_ref()
            }
            _ => None,
        }
    }
}

/// Detail of a service-reported error: the raw message string, plus its
/// structured rendition when the message happens to be the `{code, messages}`
/// JSON shape.
#[derive(Debug, Clone)]
pub struct ServiceError {
    pub message: String,
    pub parsed: Option<ErrorMessage>,
}

impl ServiceError {
    /// Wraps a raw message and attempts the secondary structured parse.
    /// The parse is best-effort: any failure leaves `parsed` unset. This is
    /// the one place where a parse failure is deliberately discarded.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let parsed = ErrorMessage::parse(&message);
        Self { message, parsed }
    }
}
