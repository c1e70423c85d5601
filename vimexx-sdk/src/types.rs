//! Credential and wire types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::loose;

// ============ Credential Types ============

/// Validation error for [`VimexxCredentials`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Credentials for the OAuth2 password grant used by the Vimexx API.
///
/// Serialized in camelCase so it can live in a host application's config:
///
/// ```json
/// { "clientId": "42", "clientKey": "...", "username": "...", "password": "..." }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VimexxCredentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_key: String,
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// (key, label) pairs in field order.
const CREDENTIAL_FIELDS: [(&str, &str); 4] = [
    ("clientId", "Client ID"),
    ("clientKey", "Client Key"),
    ("username", "Username"),
    ("password", "Password"),
];

impl VimexxCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_key: client_key.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Construct credentials from a flat key-value map, validating required fields.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let [client_id, client_key, username, password] =
            CREDENTIAL_FIELDS.map(|(key, label)| Self::get_required_field(map, key, label));

        Ok(Self {
            client_id: client_id?,
            client_key: client_key?,
            username: username?,
            password: password?,
        })
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    /// Convert credentials to a flat key-value map.
    pub fn to_map(&self) -> HashMap<String, String> {
        [
            ("clientId".to_string(), self.client_id.clone()),
            ("clientKey".to_string(), self.client_key.clone()),
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
        ]
        .into()
    }

    /// Check that no field is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        let values = [
            &self.client_id,
            &self.client_key,
            &self.username,
            &self.password,
        ];
        for ((key, label), value) in CREDENTIAL_FIELDS.iter().zip(values) {
            if value.trim().is_empty() {
                return Err(CredentialValidationError::EmptyField {
                    field: (*key).to_string(),
                    label: (*label).to_string(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for VimexxCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimexxCredentials")
            .field("client_id", &self.client_id)
            .field("client_key", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============ Wire Types ============

/// Form body of the password grant token request.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'static str,
}

/// Token endpoint response. Only `access_token` is used.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
}

/// Envelope wrapped around every API payload.
#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a, B> {
    pub body: &'a B,
    pub version: &'static str,
}

/// `{sld, tld}` payload shared by most domain endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct DomainRef<'a> {
    pub sld: &'a str,
    pub tld: &'a str,
}

/// Body of `PUT /whmcs/domain/dns`.
#[derive(Debug, Serialize)]
pub(crate) struct SetDnsBody<'a> {
    pub sld: &'a str,
    pub tld: &'a str,
    pub dns_records: Vec<ApiDnsRecord>,
}

/// One `{ns}` entry of the nameserver list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct NameserverEntry {
    pub ns: String,
}

/// Body of `PUT /whmcs/domain/nameservers`.
#[derive(Debug, Serialize)]
pub(crate) struct SetNameserversBody<'a> {
    pub sld: &'a str,
    pub tld: &'a str,
    pub nameservers: Vec<NameserverEntry>,
    pub name: String,
}

/// DNS record as the API sends and accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDnsRecord {
    /// Record type, e.g. `A` or `MX`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Hostname the record applies to.
    pub name: String,
    /// Record value.
    pub content: String,
    /// Priority, meaningful for MX.
    #[serde(deserialize_with = "loose::u16_like")]
    pub prio: u16,
    /// Time to live. Always set on writes; ignored on reads.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Nameservers of a domain. Slots the API leaves out are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameservers {
    #[serde(default, deserialize_with = "loose::string_or_empty")]
    pub ns1: String,
    #[serde(default, deserialize_with = "loose::string_or_empty")]
    pub ns2: String,
    #[serde(default, deserialize_with = "loose::string_or_empty")]
    pub ns3: String,
    #[serde(default, deserialize_with = "loose::string_or_empty")]
    pub ns4: String,
    #[serde(default, deserialize_with = "loose::string_or_empty")]
    pub ns5: String,
}

impl Nameservers {
    /// Non-empty slots in `ns1..ns5` order.
    pub fn configured(&self) -> Vec<&str> {
        [&self.ns1, &self.ns2, &self.ns3, &self.ns4, &self.ns5]
            .into_iter()
            .filter(|ns| !ns.is_empty())
            .map(String::as_str)
            .collect()
    }
}

// ============ Response helpers ============

/// Truthiness of the response's `result` field. Absent counts as `false`.
pub fn result_flag(response: &Value) -> bool {
    response.get("result").is_some_and(loose::is_truthy)
}

/// The response's human-readable `message`, if the API sent one.
pub fn api_message(response: &Value) -> Option<&str> {
    response.get("message").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_map() -> HashMap<String, String> {
        [
            ("clientId".to_string(), "42".to_string()),
            ("clientKey".to_string(), "secret".to_string()),
            ("username".to_string(), "user@example.com".to_string()),
            ("password".to_string(), "hunter2".to_string()),
        ]
        .into()
    }

    #[test]
    fn credentials_map_roundtrip() {
        let res = VimexxCredentials::from_map(&full_map());
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(cred) = res else {
            return;
        };
        assert_eq!(cred.client_id, "42");
        assert_eq!(cred.password, "hunter2");
        assert_eq!(cred.to_map(), full_map());
    }

    #[test]
    fn credentials_missing_field() {
        let mut map = full_map();
        map.remove("clientKey");
        let res = VimexxCredentials::from_map(&map);
        assert!(
            matches!(&res, Err(CredentialValidationError::MissingField { field, .. }) if field == "clientKey"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_empty_field() {
        let mut map = full_map();
        map.insert("username".to_string(), "   ".to_string());
        let res = VimexxCredentials::from_map(&map);
        assert!(
            matches!(&res, Err(CredentialValidationError::EmptyField { field, .. }) if field == "username"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_validate() {
        assert!(VimexxCredentials::new("1", "k", "u", "p").validate().is_ok());
        let res = VimexxCredentials::new("1", "", "u", "p").validate();
        assert!(
            matches!(&res, Err(CredentialValidationError::EmptyField { field, .. }) if field == "clientKey"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_serde_camel_case() {
        let cred = VimexxCredentials::new("1", "k", "u", "p");
        let json = serde_json::to_value(&cred).unwrap_or_default();
        assert_eq!(
            json,
            json!({"clientId": "1", "clientKey": "k", "username": "u", "password": "p"})
        );
    }

    #[test]
    fn credentials_debug_redacts_secrets() {
        let cred = VimexxCredentials::new("1", "topsecret", "u", "hunter2");
        let debug = format!("{cred:?}");
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn envelope_shape() {
        let body = DomainRef {
            sld: "example",
            tld: "nl",
        };
        let envelope = RequestEnvelope {
            body: &body,
            version: "8.4.0-release.1",
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap_or_default(),
            json!({"body": {"sld": "example", "tld": "nl"}, "version": "8.4.0-release.1"})
        );
    }

    #[test]
    fn nameservers_default_missing_slots() {
        let ns: Nameservers =
            serde_json::from_value(json!({"ns1": "ns1.example.com", "ns3": null}))
                .unwrap_or_default();
        assert_eq!(ns.ns1, "ns1.example.com");
        assert_eq!(ns.ns2, "");
        assert_eq!(ns.ns3, "");
        assert_eq!(ns.configured(), vec!["ns1.example.com"]);
    }

    #[test]
    fn result_flag_truthiness() {
        assert!(result_flag(&json!({"result": true})));
        assert!(result_flag(&json!({"result": 1})));
        assert!(!result_flag(&json!({"result": false})));
        assert!(!result_flag(&json!({"result": "0"})));
        assert!(!result_flag(&json!({"result": null})));
        assert!(!result_flag(&json!({})));
    }

    #[test]
    fn api_message_extracted() {
        assert_eq!(
            api_message(&json!({"message": "Domain not found"})),
            Some("Domain not found")
        );
        assert_eq!(api_message(&json!({"result": false})), None);
    }
}
