//! Drift suppression.
//!
//! The Service normalizes much of what it is sent: optional fields come back
//! as zero values, codecs come back wrapped, primary keys come back quoted,
//! and redacted properties come back missing. The comparators here decide,
//! attribute by attribute, whether a server value is a real change or the
//! same intent in a different spelling. Every read path goes through them.

use std::collections::BTreeSet;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use timeplus_client::UdfAuthMethod;

/// Column the Service adds to every stream as its event time.
pub const VIRTUAL_TIME_COLUMN: &str = "_tp_time";

/// Stream retention reported when none was configured.
pub const STREAM_RETENTION_UNSET: i64 = 0;

/// Materialized view retention reported when none was configured.
pub const VIEW_RETENTION_UNSET: i64 = -1;

/// Keep a null string null when the server reports the empty string.
pub fn optional_string(prior: &Option<String>, server: &str) -> Option<String> {
    if prior.is_none() && server.is_empty() {
        None
    } else {
        Some(server.to_string())
    }
}

/// Keep a null integer null when the server reports `sentinel`.
pub fn optional_i64(prior: Option<i64>, server: i64, sentinel: i64) -> Option<i64> {
    if prior.is_none() && server == sentinel {
        None
    } else {
        Some(server)
    }
}

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether two SQL expressions differ only in whitespace.
pub fn whitespace_equivalent(a: &str, b: &str) -> bool {
    without_whitespace(a) == without_whitespace(b)
}

/// Reconcile a TTL expression: the prior spelling wins when only whitespace differs.
pub fn ttl_expression(prior: &Option<String>, server: &str) -> Option<String> {
    match prior {
        None if server.is_empty() => None,
        Some(p) if whitespace_equivalent(p, server) => Some(p.clone()),
        _ => Some(server.to_string()),
    }
}

/// Remove the `CODEC(...)` wrapper the Service puts around column codecs.
///
/// `CODEC(LZ4)` becomes `LZ4` and `CODEC()` the empty string; a value
/// without the wrapper is returned as is.
pub fn unwrap_codec(codec: &str) -> String {
    match codec.strip_prefix("CODEC(") {
        Some(inner) => inner.strip_suffix(')').unwrap_or(inner).to_string(),
        None => codec.to_string(),
    }
}

/// Whether a server column should be hidden from state.
///
/// `_tp_time` is hidden unless the prior state declared it.
pub fn hide_column(name: &str, prior_declares_virtual: bool) -> bool {
    name == VIRTUAL_TIME_COLUMN && !prior_declares_virtual
}

/// Parse a primary key expression into column names.
///
/// Accepts ``(`a`,`b`)``, `` `a`,`b` ``, `a, b`, and `a`.
pub fn parse_primary_key(expr: &str) -> BTreeSet<String> {
    let expr = expr.trim();
    let expr = expr
        .strip_prefix('(')
        .and_then(|e| e.strip_suffix(')'))
        .unwrap_or(expr);
    expr.split(',')
        .map(|k| k.trim().trim_start_matches('`').trim_end_matches('`').trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serialize primary key columns as ``(`a`,`b`)``, in declaration order.
pub fn format_primary_key<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let quoted: Vec<String> = names.into_iter().map(|n| format!("`{}`", n)).collect();
    if quoted.is_empty() {
        None
    } else {
        Some(format!("({})", quoted.join(",")))
    }
}

/// Overlay server properties onto the properties held in state.
///
/// Returns `Ok(None)` when the overlay changes nothing, so the state string
/// is left byte-for-byte intact. Keys the server omits (redacted secrets)
/// survive in the overlay.
pub fn overlay_properties(
    state: Option<&str>,
    server: &Map<String, Value>,
) -> serde_json::Result<Option<String>> {
    let original: Map<String, Value> = match state {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s)?,
        _ => Map::new(),
    };

    let mut overlaid = original.clone();
    for (k, v) in server {
        overlaid.insert(k.clone(), v.clone());
    }

    if overlaid == original {
        Ok(None)
    } else {
        serde_json::to_string(&overlaid).map(Some)
    }
}

/// Whether a function's auth header should be left out of state.
pub fn hide_auth_header(prior_has_header: bool, method: Option<UdfAuthMethod>) -> bool {
    !prior_has_header && matches!(method, None | Some(UdfAuthMethod::None))
}

/// Reconcile a JSON document held as text: keep the prior text when it
/// decodes to the same value as the server's, otherwise emit the canonical
/// encoding of the server value.
///
/// Decoding the prior text as `T` normalizes fields the user left out.
pub fn json_document<T>(prior: Option<&str>, server: &T) -> serde_json::Result<String>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    if let Some(p) = prior
        && serde_json::from_str::<T>(p).is_ok_and(|v| &v == server)
    {
        return Ok(p.to_string());
    }
    serde_json::to_string(server)
}
