//! Serde helpers for the Timeplus wire format.
//!
//! Responsibilities:
//! - Treat explicit JSON `null` as the field's zero value.
//! - Accept numeric fields encoded either as numbers or as strings.
//!
//! Explicitly does NOT handle:
//! - Sentinel interpretation (`0` / `-1` meaning "unset"); that is a
//!   reconciliation concern in the provider crate.
//!
//! Invariants / assumptions:
//! - The server may send `null` for optional strings, lists, and maps.
//! - These helpers must not log or print values; errors are generic parse errors.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum I64OrString {
    I64(i64),
    String(String),
}

/// Deserialize a value, mapping JSON `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an `i64` from a number, a numeric string, or `null` (as `0`).
pub fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<I64OrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(I64OrString::I64(v)) => Ok(v),
        Some(I64OrString::String(s)) if s.trim().is_empty() => Ok(0),
        Some(I64OrString::String(s)) => s.trim().parse::<i64>().map_err(D::Error::custom),
    }
}

/// Parse an optional enum-like string, treating `null` and `""` as absent.
pub fn opt_parse_non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(D::Error::custom),
    }
}
