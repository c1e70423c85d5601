use serde::{Deserialize, Serialize};

use crate::types::CredentialValidationError;

/// Error type for every Vimexx API operation.
///
/// Transport failures (connection errors, timeouts, non-2xx statuses) and
/// malformed responses are reported here and never recovered locally.
///
/// A *logical* failure of a boolean operation (`register_domain`, `set_dns`,
/// `set_nameservers`) is not an error: those return `Ok(false)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum VimexxError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Timeouts come from the configured `reqwest::Client`; the default client sets none.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rejected the credentials or the bearer token (HTTP 401).
    InvalidCredentials {
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The authenticated account may not perform the operation (HTTP 403).
    PermissionDenied {
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Any other non-2xx HTTP status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The response body could not be parsed into the expected shape.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A field the operation depends on is absent from the response.
    MissingField {
        /// Dotted path of the missing field, e.g. `data.dns_records`.
        field: String,
    },

    /// A caller-supplied argument is invalid.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Credentials failed local validation before any request was sent.
    Credentials {
        /// Structured validation failure.
        error: CredentialValidationError,
    },
}

impl VimexxError {
    /// Whether the error is caused by the caller (bad input, bad credentials)
    /// rather than by the transport or the API. Used for log levels.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidParameter { .. }
                | Self::Credentials { .. }
        )
    }

    pub(crate) fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn parse_error(detail: impl ToString) -> Self {
        Self::ParseError {
            detail: detail.to_string(),
        }
    }
}

impl std::fmt::Display for VimexxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "[vimexx] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[vimexx] Request timeout: {detail}"),
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[vimexx] Invalid credentials: {msg}")
                } else {
                    write!(f, "[vimexx] Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[vimexx] Permission denied: {msg}")
                } else {
                    write!(f, "[vimexx] Permission denied")
                }
            }
            Self::HttpStatus {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[vimexx] HTTP {status}: {msg}")
                } else {
                    write!(f, "[vimexx] HTTP {status}")
                }
            }
            Self::ParseError { detail } => write!(f, "[vimexx] Parse error: {detail}"),
            Self::MissingField { field } => {
                write!(f, "[vimexx] Missing field '{field}' in response")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "[vimexx] Invalid parameter '{param}': {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "[vimexx] Serialization error: {detail}")
            }
            Self::Credentials { error } => write!(f, "[vimexx] {error}"),
        }
    }
}

impl std::error::Error for VimexxError {}

impl From<CredentialValidationError> for VimexxError {
    fn from(error: CredentialValidationError) -> Self {
        Self::Credentials { error }
    }
}

/// Convenience type alias for `Result<T, VimexxError>`.
pub type Result<T> = std::result::Result<T, VimexxError>;
