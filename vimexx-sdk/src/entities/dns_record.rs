//! DNS record entity

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, VimexxError};
use crate::types::ApiDnsRecord;

/// TTL sent with every record written to the API.
pub const DNS_RECORD_TTL: u32 = 3600;

/// Record type strings understood by the API.
///
/// The record type of a [`DnsRecord`] is free-form; these are the common ones.
pub mod record_type {
    pub const A: &str = "A";
    pub const AAAA: &str = "AAAA";
    pub const CNAME: &str = "CNAME";
    pub const MX: &str = "MX";
    pub const TXT: &str = "TXT";
}

/// A DNS record of a domain.
///
/// No local validation is done: the type, hostname and content are passed to
/// the API as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsRecord {
    hostname: String,
    record_type: String,
    content: String,
    prio: u16,
}

impl DnsRecord {
    pub fn new(
        record_type: impl Into<String>,
        hostname: impl Into<String>,
        content: impl Into<String>,
        prio: u16,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            record_type: record_type.into(),
            content: content.into(),
            prio,
        }
    }

    pub fn a(hostname: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(record_type::A, hostname, content, 0)
    }

    pub fn aaaa(hostname: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(record_type::AAAA, hostname, content, 0)
    }

    pub fn cname(hostname: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(record_type::CNAME, hostname, content, 0)
    }

    /// MX record with an explicit priority.
    pub fn mx(hostname: impl Into<String>, prio: u16, content: impl Into<String>) -> Self {
        Self::new(record_type::MX, hostname, content, prio)
    }

    pub fn txt(hostname: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(record_type::TXT, hostname, content, 0)
    }

    /// Parse one entry of `data.dns_records`.
    ///
    /// `name`, `type`, `content` and `prio` are required; `prio` may be a
    /// number or a numeric string.
    pub fn from_api(data: &Value) -> Result<Self> {
        let raw = ApiDnsRecord::deserialize_from(data)?;
        Ok(Self {
            hostname: raw.name,
            record_type: raw.record_type,
            content: raw.content,
            prio: raw.prio,
        })
    }

    /// API shape of the record, with the TTL fixed to [`DNS_RECORD_TTL`].
    pub fn for_api(&self) -> ApiDnsRecord {
        ApiDnsRecord {
            record_type: self.record_type.clone(),
            name: self.hostname.clone(),
            content: self.content.clone(),
            prio: self.prio,
            ttl: Some(DNS_RECORD_TTL),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn prio(&self) -> u16 {
        self.prio
    }
}

impl ApiDnsRecord {
    fn deserialize_from(data: &Value) -> Result<Self> {
        Self::deserialize(data).map_err(|e| {
            log::error!("[vimexx] Invalid DNS record {data}: {e}");
            VimexxError::parse_error(format!("invalid DNS record: {e}"))
        })
    }
}
