//! Typed views of the API's domain and DNS record payloads.

mod dns_record;
mod domain;

pub use dns_record::{DNS_RECORD_TTL, DnsRecord, record_type};
pub use domain::Domain;
