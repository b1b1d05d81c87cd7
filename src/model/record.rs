//! Typed DNS records parsed from the service's polymorphic record list.

use serde_json::{Map, Value};

use super::extract::{int_or, join_strings, string_or};

/// Payload field holding the printable value for a record-type code.
///
/// Codes absent from this table leave `value` empty; unknown record types
/// must not break parsing.
fn value_field(type_code: i64) -> Option<&'static str> {
    match type_code {
        1 | 28 => Some("address"),
        2 | 15 => Some("target"),
        6 => Some("host"),
        16 => Some("strings"),
        257 => Some("value"),
        _ => None,
    }
}

/// A single DNS resource record returned by the service.
///
/// The shared fields are present for every record; `data` carries the
/// fields specific to SOA, MX and CAA records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Numeric resource-record type (1=A, 2=NS, 6=SOA, 15=MX, 16=TXT,
    /// 28=AAAA, 257=CAA).
    pub type_code: i64,
    /// Human-readable record-type string mirroring `type_code`.
    pub dns_type: String,
    pub name: String,
    pub ttl: i64,
    /// Printable record value, resolved through the type-code table.
    pub value: String,
    /// Zone-file rendition of the record as reported by the service.
    pub raw_text: String,
    pub data: RecordData,
}

/// Variant-specific record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Standard,
    Soa(SoaData),
    Mx { priority: i64, host: String },
    Caa { flags: i64, tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub admin: String,
    pub host: String,
    pub expire: i64,
    pub minimum: i64,
    pub refresh: i64,
    pub retry: i64,
    pub serial: i64,
}

impl DnsRecord {
    /// Builds a record from one raw entry of the `dnsRecords` list.
    ///
    /// Never fails: missing or falsy fields fall back to typed defaults.
    pub fn from_map(values: &Map<String, Value>) -> Self {
        let type_code = int_or(values, "type");
        let value = match value_field(type_code) {
            Some("strings") => join_strings(values, "strings"),
            Some(field) => string_or(values, field),
            None => String::new(),
        };

        Self {
            type_code,
            dns_type: string_or(values, "dnsType"),
            name: string_or(values, "name"),
            ttl: int_or(values, "ttl"),
            value,
            raw_text: string_or(values, "rawText"),
            data: RecordData::from_map(type_code, values),
        }
    }

    pub fn as_soa(&self) -> Option<&SoaData> {
        match &self.data {
            RecordData::Soa(soa) => Some(soa),
            _ => None,
        }
    }

    /// MX `(priority, host)` when this is an MX record.
    pub fn as_mx(&self) -> Option<(i64, &str)> {
        match &self.data {
            RecordData::Mx { priority, host } => Some((*priority, host.as_str())),
            _ => None,
        }
    }

    /// CAA `(flags, tag)` when this is a CAA record.
    pub fn as_caa(&self) -> Option<(i64, &str)> {
        match &self.data {
            RecordData::Caa { flags, tag } => Some((*flags, tag.as_str())),
            _ => None,
        }
    }
}

impl RecordData {
    /// Dispatches a raw entry to its record variant by type code.
    /// Codes without a specialized variant produce `Standard`.
    fn from_map(type_code: i64, values: &Map<String, Value>) -> Self {
        match type_code {
            6 => RecordData::Soa(SoaData {
                admin: string_or(values, "admin"),
                host: string_or(values, "host"),
                expire: int_or(values, "expire"),
                minimum: int_or(values, "minimum"),
                refresh: int_or(values, "refresh"),
                retry: int_or(values, "retry"),
                serial: int_or(values, "serial"),
            }),
            15 => RecordData::Mx {
                priority: int_or(values, "priority"),
                host: string_or(values, "target"),
            },
            257 => RecordData::Caa {
                flags: int_or(values, "flags"),
                tag: string_or(values, "tag"),
            },
            _ => RecordData::Standard,
        }
    }
}
