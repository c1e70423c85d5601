//! Domain lookup and registration

use reqwest::Method;
use serde_json::{Map, Value};

use crate::entities::Domain;
use crate::error::{Result, VimexxError};
use crate::types::DomainRef;

use super::VimexxClient;
use super::http::boolean_result;

impl VimexxClient {
    /// Look up a domain by its labels, e.g. `("example", "nl")`.
    ///
    /// The `data` object of the sync response is laid over `{sld, tld}`, so
    /// labels echoed by the API take precedence.
    pub async fn domain(&self, sld: &str, tld: &str) -> Result<Domain<'_>> {
        let response = self
            .request(Method::POST, "/whmcs/domain/sync", &DomainRef { sld, tld })
            .await?;

        let data = match response.get("data") {
            None | Some(Value::Null) => return Err(VimexxError::missing_field("data")),
            Some(Value::Object(data)) => data,
            Some(other) => {
                return Err(VimexxError::parse_error(format!(
                    "expected 'data' to be an object, got {other}"
                )));
            }
        };

        let mut merged = Map::new();
        merged.insert("sld".to_string(), Value::from(sld));
        merged.insert("tld".to_string(), Value::from(tld));
        merged.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));

        Domain::from_api(self, &Value::Object(merged))
    }

    /// Register a domain. Returns the truthiness of the API's `result`.
    pub async fn register_domain(&self, sld: &str, tld: &str) -> Result<bool> {
        let response = self
            .request(Method::POST, "/whmcs/domain/register", &DomainRef { sld, tld })
            .await?;
        Ok(boolean_result("register_domain", &response))
    }
}
