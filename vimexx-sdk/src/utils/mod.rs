//! Utility modules.

/// Lenient deserializers for the loosely typed values the API returns.
pub(crate) mod loose;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
