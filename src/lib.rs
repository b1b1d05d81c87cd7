//! Client library for the DNS Lookup web API.
//!
//! Builds a validated request for a domain name with an optional
//! record-type filter, sends it to the remote service and parses the JSON
//! response into typed DNS records. This is not a DNS resolver: no actual
//! DNS queries are performed and nothing is cached.
//!
//! # Example
//!
//! ```no_run
//! use dns_lookup_api::{Client, RR_TYPES_ALL};
//!
//! # fn main() -> Result<(), dns_lookup_api::DnsLookupError> {
//! let mut client = Client::new("at_0123456789abcdefghijklmnopqrs")?;
//! let response = client.get("example.com", Some(RR_TYPES_ALL))?;
//! for record in &response.dns_records {
//!     println!("{} {} {}", record.dns_type, record.name, record.value);
//! }
//! for ns in response.records_of_type("NS") {
//!     println!("nameserver: {}", ns.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod transport;
pub mod validation;

pub use client::{Client, ClientBuilder, RR_TYPES_ALL};
pub use error::{DnsLookupError, ServiceError};
pub use model::{DnsRecord, ErrorMessage, RecordData, Response, SoaData};
pub use transport::{ApiRequester, ApiTransport, RequestPayload};
pub use validation::OutputFormat;
