//! # vimexx-sdk
//!
//! Client library for the [Vimexx](https://www.vimexx.nl/) domain registrar API:
//! look up and register domains, read and replace DNS records, read and set
//! nameservers.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vimexx_sdk::{DnsRecord, VimexxClient, VimexxCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = VimexxCredentials::new("12", "client-key", "user@example.com", "password");
//!     let mut client = VimexxClient::try_new(credentials)?;
//!     client.enable_test_mode(true);
//!
//!     let domain = client.domain("example", "nl").await?;
//!     println!("{} expires {}", domain.name(), domain.expiration_date());
//!
//!     for record in domain.dns().await? {
//!         println!("{} {} {}", record.hostname(), record.record_type(), record.content());
//!     }
//!
//!     // set_dns replaces the full record set
//!     let mut records = domain.dns().await?;
//!     records.push(DnsRecord::txt("@", "v=spf1 include:_spf.example.net -all"));
//!     if !domain.set_dns(&records).await? {
//!         eprintln!("DNS update was rejected");
//!     }
//!
//!     domain.set_nameservers(&["ns1.example.net", "ns2.example.net"]).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! The first request of a [`VimexxClient`] obtains an access token with the
//! OAuth2 password grant; the token is reused for the lifetime of the client
//! and never refreshed.
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, VimexxError>`](VimexxError). Transport
//! failures and malformed responses are errors; nothing is retried. The
//! boolean operations (`register_domain`, `set_dns`, `set_nameservers`) report
//! an API-side refusal as `Ok(false)`.

mod client;
mod entities;
mod error;
mod http_client;
mod types;
mod utils;

pub use client::{API_ENDPOINT, VimexxClient, WHMCS_VERSION};
pub use entities::{DNS_RECORD_TTL, DnsRecord, Domain, record_type};
pub use error::{Result, VimexxError};
pub use types::{
    ApiDnsRecord, CredentialValidationError, Nameservers, VimexxCredentials, api_message,
    result_flag,
};

// HTTP method type taken by `VimexxClient::request`.
pub use reqwest::Method;

pub use utils::log_sanitizer;
