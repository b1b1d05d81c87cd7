//! Aggregate of all records returned for one domain lookup.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::extract::{int_list_or, string_or};
use super::record::DnsRecord;
use crate::error::DnsLookupError;

/// Parsed `DNSData` payload for one successful lookup.
///
/// Records are exposed twice: in payload order via `dns_records`, and
/// grouped by their `dnsType` string via `records_by_type`. The response
/// exclusively owns its records; nothing is shared across responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub domain_name: String,
    /// Raw numeric type codes echoed by the service (`-1` means all).
    pub types: Vec<i64>,
    /// Echo of the record-type filter sent with the request.
    pub dns_types: String,
    /// All records in payload order, specialized variants preserved.
    pub dns_records: Vec<DnsRecord>,
    /// Records grouped by `dns_type`; one key per distinct type present.
    pub records_by_type: HashMap<String, Vec<DnsRecord>>,
}

impl Response {
    /// Builds a response from the decoded `DNSData` value.
    ///
    /// The value must be an object holding a `dnsRecords` array; anything
    /// else is a malformed payload reported as unparsable. Individual record
    /// entries, by contrast, can never fail to parse.
    pub fn from_value(data: &Value) -> Result<Self, DnsLookupError> {
        let values = data.as_object().ok_or_else(Self::malformed)?;
        let raw_records = values
            .get("dnsRecords")
            .and_then(Value::as_array)
            .ok_or_else(Self::malformed)?;

        let empty = Map::new();

        // Seed one bucket per distinct dnsType before any record is built,
        // then fill the buckets in a second pass.
        let mut records_by_type: HashMap<String, Vec<DnsRecord>> = HashMap::new();
        for raw in raw_records {
            let entry = raw.as_object().unwrap_or(&empty);
            records_by_type.entry(string_or(entry, "dnsType")).or_default();
        }

        let mut dns_records = Vec::with_capacity(raw_records.len());
        for raw in raw_records {
            let entry = raw.as_object().unwrap_or(&empty);
            let record = DnsRecord::from_map(entry);
            if let Some(bucket) = records_by_type.get_mut(&record.dns_type) {
                bucket.push(record.clone());
            }
            dns_records.push(record);
        }

        Ok(Self {
            domain_name: string_or(values, "domainName"),
            types: int_list_or(values, "types"),
            dns_types: string_or(values, "dnsTypes"),
            dns_records,
            records_by_type,
        })
    }

    /// Records of one `dnsType`, in payload order. Empty for unknown types.
    pub fn records_of_type(&self, dns_type: &str) -> &[DnsRecord] {
        self.records_by_type
            .get(dns_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn malformed() -> DnsLookupError {
        DnsLookupError::UnparsableApiResponse {
            message: "Response data lacks a dnsRecords list".to_string(),
            source: None,
        }
    }
}
