//! Shared test helpers: a mocked Vimexx API and live-test context

#![allow(dead_code)]

use std::env;

use serde_json::{Value, json};
use vimexx_sdk::{VimexxClient, VimexxCredentials, WHMCS_VERSION};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token handed out by the mocked token endpoint.
pub const TOKEN: &str = "test-token";

/// Skip a test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub fn test_credentials() -> VimexxCredentials {
    VimexxCredentials::new("42", "secret", "user", "pass")
}

/// Client pointed at the mock server.
pub fn test_client(server: &MockServer) -> VimexxClient {
    VimexxClient::new(test_credentials()).with_endpoint(server.uri())
}

/// `{body, version}` envelope the API expects around `body`.
pub fn envelope(body: Value) -> Value {
    json!({ "body": body, "version": WHMCS_VERSION })
}

/// Token endpoint answering with [`TOKEN`], expected to be hit `calls` times.
pub async fn mount_token(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": TOKEN
        })))
        .expect(calls)
        .mount(server)
        .await;
}

/// Authenticated live-API endpoint answering `response` to exactly `request_body`.
pub async fn mount_api(
    server: &MockServer,
    http_method: &str,
    api_path: &str,
    request_body: Value,
    response: Value,
) {
    Mock::given(method(http_method))
        .and(path(format!("/api/v1{api_path}")))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(envelope(request_body)))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

/// Sync response body for `example.com`.
pub fn sync_response() -> Value {
    json!({
        "result": true,
        "message": "",
        "data": {
            "expireDate": "2025-01-01",
            "dnsManagement": true,
            "transferredAway": false,
            "autoExtend": "1"
        }
    })
}

/// Credentials and domain for tests against the real API.
pub struct LiveContext {
    pub client: VimexxClient,
    pub sld: String,
    pub tld: String,
}

impl LiveContext {
    /// Build from `VIMEXX_*` variables and `TEST_DOMAIN` (e.g. `example.nl`).
    /// Uses the test API unless `VIMEXX_LIVE=1`.
    pub fn from_env() -> Option<Self> {
        let credentials = VimexxCredentials::new(
            env::var("VIMEXX_CLIENT_ID").ok()?,
            env::var("VIMEXX_CLIENT_KEY").ok()?,
            env::var("VIMEXX_USERNAME").ok()?,
            env::var("VIMEXX_PASSWORD").ok()?,
        );
        let domain = env::var("TEST_DOMAIN").ok()?;
        let (sld, tld) = domain.split_once('.')?;

        let mut client = VimexxClient::try_new(credentials).ok()?;
        client.enable_test_mode(env::var("VIMEXX_LIVE").as_deref() != Ok("1"));

        Some(Self {
            client,
            sld: sld.to_string(),
            tld: tld.to_string(),
        })
    }
}
