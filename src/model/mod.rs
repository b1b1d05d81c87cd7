//! Data model for parsed DNS lookup responses.

mod error_message;
mod extract;
mod record;
mod response;

pub use error_message::ErrorMessage;
pub use record::{DnsRecord, RecordData, SoaData};
pub use response::Response;
