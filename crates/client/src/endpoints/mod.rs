//! Low-level request plumbing shared by every resource verb.

mod request;
pub mod url_encoding;

pub use request::{decode_json, send_request};
pub use url_encoding::{encode_path_segment, resource_url};
