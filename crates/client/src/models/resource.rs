use serde::Serialize;
use serde::de::DeserializeOwned;

/// A value the generic transport verbs can address.
///
/// `path()` is the collection name under the versioned base URL and `id()`
/// the instance identifier. `id()` is ignored for create (POST) and must be
/// non-empty for every other verb.
pub trait ApiResource: Serialize + DeserializeOwned + Send + Sync {
    fn path(&self) -> &'static str;

    fn id(&self) -> &str;
}
