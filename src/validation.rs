//! Request-parameter validation, run before any network call.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::error::DnsLookupError;

static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^at_[a-z0-9]{29}$").expect("API key pattern is valid"));

// Label-dot sequence plus a top-level label of 2+ alphanumerics. Plain
// `regex` cannot compile the lookbehind, hence `fancy_regex`.
static DOMAIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-z_](?:[0-9a-z_-]{0,62}(?<=[0-9a-z_-])[0-9a-z_])?\.)+[0-9a-z][0-9a-z-]{0,62}[a-z0-9]$",
    )
    .expect("domain name pattern is valid")
});

pub fn validate_api_key(api_key: &str) -> Result<(), DnsLookupError> {
    if API_KEY_RE.is_match(api_key).unwrap_or(false) {
        Ok(())
    } else {
        Err(DnsLookupError::Parameter(
            "Invalid API key format.".to_string(),
        ))
    }
}

pub fn validate_domain_name(domain: &str) -> Result<(), DnsLookupError> {
    if DOMAIN_NAME_RE.is_match(domain).unwrap_or(false) {
        Ok(())
    } else {
        Err(DnsLookupError::Parameter("Invalid domain name".to_string()))
    }
}

/// Response formats understood by the service. Only JSON is parsed by this
/// crate; XML bodies pass through to the caller unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = DnsLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(DnsLookupError::Parameter(
                "Response format must be json or xml".to_string(),
            )),
        }
    }
}
