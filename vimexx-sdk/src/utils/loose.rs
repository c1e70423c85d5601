//! Lenient value handling
//!
//! The API is backed by PHP and is not strict about scalar types: flags may
//! arrive as `true`, `1`, `"1"` or `"true"`, priorities as `10` or `"10"`.
//! These helpers accept every such spelling.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// PHP-style truthiness: `false`, `0`, `0.0`, `""`, `"0"`, `null`, `[]` and `{}` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Deserialize a boolean-like value (`true`, `1`, `"1"`, `"true"`, ...).
pub fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        v @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
            Ok(is_truthy(&v))
        }
        other => Err(Error::custom(format!("expected a boolean, got {other}"))),
    }
}

/// Deserialize a `u16` sent either as a number or as a numeric string.
pub fn u16_like<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    let raw = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) if s.trim().is_empty() => 0,
        NumberOrString::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::custom(format!("invalid number '{s}': {e}")))?,
    };
    u16::try_from(raw).map_err(|_| Error::custom(format!("{raw} is out of range for u16")))
}

/// Deserialize an optional scalar into a string; `null` becomes `""`.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        v @ (Value::Bool(_) | Value::Number(_)) => Ok(v.to_string()),
        other => Err(Error::custom(format!("expected a string, got {other}"))),
    }
}

/// Deserialize a required scalar into a string. Numbers are stringified; `null` is rejected.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        v @ Value::Number(_) => Ok(v.to_string()),
        other => Err(Error::custom(format!("expected a string, got {other}"))),
    }
}
