//! Authenticated, enveloped API requests

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, VimexxError};
use crate::http_client::HttpUtils;
use crate::types::{RequestEnvelope, api_message, result_flag};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{VimexxClient, WHMCS_VERSION};

impl VimexxClient {
    /// Send a request to the Vimexx API and return the parsed JSON response.
    ///
    /// `data` is wrapped as `{"body": data, "version": WHMCS_VERSION}` and sent
    /// as the JSON body for every method, GET included. The bearer token is
    /// fetched first if the client has none yet.
    pub async fn request<B>(&self, method: Method, path: &str, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data).map_err(|e| VimexxError::SerializationError {
            detail: e.to_string(),
        })?;
        log::debug!("[vimexx] Request Body: {}", truncate_for_log(&body.to_string()));

        let token = self.access_token().await?;
        let url = self.api_url(path);
        let envelope = RequestEnvelope {
            body: &body,
            version: WHMCS_VERSION,
        };

        let method_name = method.to_string();
        let request = self
            .client
            .request(method, &url)
            .bearer_auth(&token)
            .json(&envelope);

        let response_text = HttpUtils::execute_request(request, &method_name, &url).await?;
        HttpUtils::parse_json(&response_text)
    }
}

/// Truthiness of `result`, logging the API's message when it is falsy.
pub(crate) fn boolean_result(operation: &str, response: &Value) -> bool {
    let ok = result_flag(response);
    if !ok {
        log::warn!(
            "[vimexx] {operation} returned a falsy result: {}",
            api_message(response).unwrap_or("<no message>")
        );
    }
    ok
}
