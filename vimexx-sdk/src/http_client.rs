//! HTTP plumbing shared by the token and API requests
//!
//! Sends a prepared `RequestBuilder`, logs the exchange, turns non-2xx
//! statuses into errors and parses JSON bodies. Requests are sent exactly
//! once: failures go straight back to the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::VimexxError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body of a 2xx response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - HTTP method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Errors
    /// * `VimexxError::Timeout` / `VimexxError::NetworkError` - transport failure
    /// * `VimexxError::InvalidCredentials` - HTTP 401
    /// * `VimexxError::PermissionDenied` - HTTP 403
    /// * `VimexxError::HttpStatus` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, VimexxError> {
        log::debug!("[vimexx] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                VimexxError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                VimexxError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[vimexx] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| VimexxError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[vimexx] Response Body: {}",
            truncate_for_log(&response_text)
        );

        check_status(status_code, response_text)
    }

    /// Parse a JSON response body.
    ///
    /// # Errors
    /// * `VimexxError::ParseError` - the body is not valid JSON for `T`
    pub fn parse_json<T>(response_text: &str) -> Result<T, VimexxError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[vimexx] JSON parse failed: {e}");
            log::error!("[vimexx] Raw response: {}", truncate_for_log(response_text));
            VimexxError::parse_error(e)
        })
    }
}

/// Map an HTTP status to `Ok(body)` for 2xx or to the matching error.
fn check_status(status_code: u16, body: String) -> Result<String, VimexxError> {
    if (200..300).contains(&status_code) {
        return Ok(body);
    }

    log::warn!("[vimexx] Request failed with HTTP {status_code}");
    let raw_message = (!body.trim().is_empty()).then(|| truncate_for_log(&body));

    Err(match status_code {
        401 => VimexxError::InvalidCredentials { raw_message },
        403 => VimexxError::PermissionDenied { raw_message },
        status => VimexxError::HttpStatus {
            status,
            raw_message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- check_status ----

    #[test]
    fn status_2xx_passes_body_through() {
        let result = check_status(200, "{}".to_string());
        assert!(
            matches!(&result, Ok(body) if body == "{}"),
            "unexpected result: {result:?}"
        );
        assert!(check_status(204, String::new()).is_ok());
    }

    #[test]
    fn status_401_is_invalid_credentials() {
        let result = check_status(401, r#"{"error":"invalid_grant"}"#.to_string());
        assert!(
            matches!(&result, Err(VimexxError::InvalidCredentials { raw_message: Some(m) }) if m.contains("invalid_grant")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn status_403_is_permission_denied() {
        let result = check_status(403, String::new());
        assert!(
            matches!(
                &result,
                Err(VimexxError::PermissionDenied { raw_message: None })
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn other_status_is_http_status() {
        let result = check_status(500, "oops".to_string());
        assert!(
            matches!(&result, Err(VimexxError::HttpStatus { status: 500, .. })),
            "unexpected result: {result:?}"
        );
        let result = check_status(302, String::new());
        assert!(
            matches!(&result, Err(VimexxError::HttpStatus { status: 302, .. })),
            "unexpected result: {result:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Token {
            access_token: String,
        }
        let result: Result<Token, VimexxError> =
            HttpUtils::parse_json(r#"{"access_token":"abc"}"#);
        assert!(
            matches!(&result, Ok(Token { access_token }) if access_token == "abc"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<serde_json::Value, VimexxError> = HttpUtils::parse_json("<html>");
        assert!(
            matches!(&result, Err(VimexxError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
