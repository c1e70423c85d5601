//! Domain entity and its DNS / nameserver operations

use chrono::NaiveDate;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::client::VimexxClient;
use crate::client::boolean_result;
use crate::error::{Result, VimexxError};
use crate::types::{DomainRef, NameserverEntry, Nameservers, SetDnsBody, SetNameserversBody};
use crate::utils::loose;

use super::DnsRecord;

/// Nameserver count accepted by `set_nameservers`.
const MIN_NAMESERVERS: usize = 2;
const MAX_NAMESERVERS: usize = 5;

/// Domain fields as merged from the sync response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainData {
    #[serde(deserialize_with = "loose::scalar_string")]
    sld: String,
    #[serde(deserialize_with = "loose::scalar_string")]
    tld: String,
    #[serde(deserialize_with = "loose::scalar_string")]
    expire_date: String,
    #[serde(deserialize_with = "loose::bool_like")]
    dns_management: bool,
    #[serde(deserialize_with = "loose::bool_like")]
    transferred_away: bool,
    #[serde(default)]
    auto_extend: Option<Value>,
}

/// A domain registered at Vimexx, identified by `(sld, tld)`.
///
/// Borrows the [`VimexxClient`] it was loaded with; the DNS and nameserver
/// operations go through that client.
#[derive(Clone)]
pub struct Domain<'a> {
    client: &'a VimexxClient,
    sld: String,
    tld: String,
    expiration_date: String,
    has_dns_management: bool,
    transferred_away: bool,
    auto_renew_enabled: bool,
}

impl<'a> Domain<'a> {
    /// Map a domain payload (`sld`, `tld`, `expireDate`, `dnsManagement`,
    /// `transferredAway`, optional `autoExtend`).
    ///
    /// Auto renew is on iff `autoExtend` is present and not `"0"`.
    pub fn from_api(client: &'a VimexxClient, data: &Value) -> Result<Self> {
        let data = DomainData::deserialize(data).map_err(|e| {
            log::error!("[vimexx] Invalid domain payload: {e}");
            VimexxError::parse_error(format!("invalid domain: {e}"))
        })?;

        Ok(Self {
            client,
            auto_renew_enabled: auto_extend_enabled(data.auto_extend.as_ref()),
            sld: data.sld,
            tld: data.tld,
            expiration_date: data.expire_date,
            has_dns_management: data.dns_management,
            transferred_away: data.transferred_away,
        })
    }

    /// Full domain name, `sld.tld`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }

    pub fn sld(&self) -> &str {
        &self.sld
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Expiration date exactly as the API sent it.
    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    /// Expiration date parsed as `YYYY-MM-DD` (a trailing time part is ignored).
    pub fn expiration_naive_date(&self) -> Option<NaiveDate> {
        let date = self.expiration_date.get(..10)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Whether DNS for the domain is managed by Vimexx.
    pub fn has_dns_management(&self) -> bool {
        self.has_dns_management
    }

    /// Whether the domain has been transferred away from Vimexx.
    pub fn is_transferred_away(&self) -> bool {
        self.transferred_away
    }

    pub fn has_auto_renew_enabled(&self) -> bool {
        self.auto_renew_enabled
    }

    fn domain_ref(&self) -> DomainRef<'_> {
        DomainRef {
            sld: &self.sld,
            tld: &self.tld,
        }
    }

    /// DNS records of the domain, in API order.
    pub async fn dns(&self) -> Result<Vec<DnsRecord>> {
        let response = self
            .client
            .request(Method::POST, "/whmcs/domain/dns", &self.domain_ref())
            .await?;

        let records = response
            .get("data")
            .and_then(|data| data.get("dns_records"))
            .filter(|records| !records.is_null())
            .ok_or_else(|| VimexxError::missing_field("data.dns_records"))?;

        let Value::Array(records) = records else {
            return Err(VimexxError::parse_error(format!(
                "expected 'data.dns_records' to be an array, got {records}"
            )));
        };

        records.iter().map(DnsRecord::from_api).collect()
    }

    /// Replace the domain's DNS records with `records`.
    ///
    /// The API receives the complete set; records left out are removed.
    /// Returns the truthiness of the API's `result`.
    pub async fn set_dns(&self, records: &[DnsRecord]) -> Result<bool> {
        let body = SetDnsBody {
            sld: &self.sld,
            tld: &self.tld,
            dns_records: records.iter().map(DnsRecord::for_api).collect(),
        };

        let response = self
            .client
            .request(Method::PUT, "/whmcs/domain/dns", &body)
            .await?;
        Ok(boolean_result("set_dns", &response))
    }

    /// Nameservers of the domain; slots the API leaves out are empty strings.
    pub async fn nameservers(&self) -> Result<Nameservers> {
        let response = self
            .client
            .request(Method::POST, "/whmcs/domain/nameservers", &self.domain_ref())
            .await?;

        match response.get("data") {
            Some(data @ Value::Object(_)) => Nameservers::deserialize(data)
                .map_err(|e| VimexxError::parse_error(format!("invalid nameservers: {e}"))),
            _ => Ok(Nameservers::default()),
        }
    }

    /// Set the domain's nameservers.
    ///
    /// Takes 2 to 5 nameservers. The first two are always sent; later entries
    /// are left out when empty. Returns the truthiness of the API's `result`.
    pub async fn set_nameservers<S: AsRef<str>>(&self, nameservers: &[S]) -> Result<bool> {
        let body = SetNameserversBody {
            sld: &self.sld,
            tld: &self.tld,
            nameservers: nameserver_entries(nameservers)?,
            name: format!("whmcs-{}", self.name()),
        };

        let response = self
            .client
            .request(Method::PUT, "/whmcs/domain/nameservers", &body)
            .await?;
        Ok(boolean_result("set_nameservers", &response))
    }
}

impl std::fmt::Debug for Domain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Domain")
            .field("sld", &self.sld)
            .field("tld", &self.tld)
            .field("expiration_date", &self.expiration_date)
            .field("has_dns_management", &self.has_dns_management)
            .field("transferred_away", &self.transferred_away)
            .field("auto_renew_enabled", &self.auto_renew_enabled)
            .finish_non_exhaustive()
    }
}

/// `autoExtend` counts as enabled when present and not `"0"`.
fn auto_extend_enabled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => s != "0",
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Some(_) => true,
    }
}

fn nameserver_entries<S: AsRef<str>>(nameservers: &[S]) -> Result<Vec<NameserverEntry>> {
    if !(MIN_NAMESERVERS..=MAX_NAMESERVERS).contains(&nameservers.len()) {
        return Err(VimexxError::InvalidParameter {
            param: "nameservers".to_string(),
            detail: format!(
                "expected {MIN_NAMESERVERS} to {MAX_NAMESERVERS} nameservers, got {}",
                nameservers.len()
            ),
        });
    }

    Ok(nameservers
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .filter(|(i, ns)| *i < MIN_NAMESERVERS || !ns.is_empty())
        .map(|(_, ns)| NameserverEntry { ns: ns.to_string() })
        .collect())
}
