//! Vimexx API client

mod auth;
mod domains;
mod http;

pub(crate) use http::boolean_result;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::types::VimexxCredentials;

/// Base URL of the Vimexx API.
pub const API_ENDPOINT: &str = "https://api.vimexx.nl";
/// WHMCS module version sent in every request envelope.
pub const WHMCS_VERSION: &str = "8.4.0-release.1";

const LIVE_PREFIX: &str = "/api/v1";
const TEST_PREFIX: &str = "/apitest/v1";

/// Client for the Vimexx registrar API.
///
/// Holds the credentials, the test-mode flag and the access token. The token
/// is fetched on first use and reused for the lifetime of the client; it is
/// never refreshed, so a client whose token expired must be replaced.
///
/// Token acquisition is serialized: concurrent first calls on a shared client
/// send a single token request.
pub struct VimexxClient {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) credentials: VimexxCredentials,
    test_mode: bool,
    pub(crate) access_token: Mutex<Option<String>>,
}

impl VimexxClient {
    /// Create a client against the live endpoint with a default `reqwest::Client`.
    pub fn new(credentials: VimexxCredentials) -> Self {
        Self {
            client: Client::new(),
            endpoint: API_ENDPOINT.to_string(),
            credentials,
            test_mode: false,
            access_token: Mutex::new(None),
        }
    }

    /// Like [`new`](Self::new), but rejects credentials with empty fields.
    pub fn try_new(credentials: VimexxCredentials) -> Result<Self> {
        credentials.validate()?;
        Ok(Self::new(credentials))
    }

    /// Use another endpoint, e.g. a mock server or a proxy. A trailing `/` is dropped.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Use a caller-configured HTTP client (timeouts, proxies, TLS).
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Switch following requests between the test API and the live API.
    pub fn enable_test_mode(&mut self, enabled: bool) -> &mut Self {
        self.test_mode = enabled;
        self
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Full URL for an API path, honouring test mode. `path` is appended as-is.
    pub fn api_url(&self, path: &str) -> String {
        let prefix = if self.test_mode {
            TEST_PREFIX
        } else {
            LIVE_PREFIX
        };
        format!("{}{prefix}{path}", self.endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &VimexxCredentials {
        &self.credentials
    }

    /// Whether an access token has been obtained yet.
    pub async fn has_access_token(&self) -> bool {
        self.access_token.lock().await.is_some()
    }
}

impl std::fmt::Debug for VimexxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimexxClient")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}
