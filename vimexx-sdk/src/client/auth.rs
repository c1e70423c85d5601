//! Access token acquisition (OAuth2 password grant)

use crate::error::{Result, VimexxError};
use crate::http_client::HttpUtils;
use crate::types::{TokenRequest, TokenResponse};
use crate::utils::log_sanitizer::mask_secret;

use super::VimexxClient;

const TOKEN_PATH: &str = "/auth/token";
const GRANT_TYPE: &str = "password";
const SCOPE: &str = "whmcs-access";

impl VimexxClient {
    /// Cached access token, fetched on first use.
    ///
    /// The lock is held across the token request so concurrent callers wait
    /// for the first fetch instead of issuing their own.
    pub(crate) async fn access_token(&self) -> Result<String> {
        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let token = self.fetch_access_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    async fn fetch_access_token(&self) -> Result<String> {
        // The token endpoint sits outside the versioned API prefix.
        let url = format!("{}{TOKEN_PATH}", self.endpoint);
        let form = TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &self.credentials.client_id,
            client_secret: &self.credentials.client_key,
            username: &self.credentials.username,
            password: &self.credentials.password,
            scope: SCOPE,
        };

        let request = self.client.post(&url).form(&form);
        let response_text = HttpUtils::execute_request(request, "POST", &url).await?;
        let response: TokenResponse = HttpUtils::parse_json(&response_text)?;

        let token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| VimexxError::missing_field("access_token"))?;

        log::debug!("[vimexx] Obtained access token {}", mask_secret(&token));
        Ok(token)
    }
}
