//! URL construction for resource endpoints.
//!
//! Identifiers (stream names, function names, server ids) are appended as a
//! single percent-encoded path segment so that a name such as `a/b` can never
//! address a different collection.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

use crate::error::{ClientError, Result};

/// Characters percent-encoded in an identifier segment (RFC 3986 §3.3 plus
/// everything that would split, terminate, or re-encode the segment).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use timeplus_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("orders"), "orders");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// `{base}/{collection}`, or `{base}/{collection}/{id}` when `id` is given.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] when `id` is given but empty.
pub fn resource_url(base_url: &str, collection: &str, id: Option<&str>) -> Result<String> {
    match id {
        None => Ok(format!("{}/{}", base_url, collection)),
        Some(id) if id.is_empty() => Err(ClientError::InvalidUrl(format!(
            "empty identifier for {} request",
            collection
        ))),
        Some(id) => Ok(format!(
            "{}/{}/{}",
            base_url,
            collection,
            encode_path_segment(id)
        )),
    }
}
