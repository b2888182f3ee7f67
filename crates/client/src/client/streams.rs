//! Stream methods for [`TimeplusClient`].
//!
//! # What this module handles:
//! - Create, read, partial update, and delete of streams by name
//!
//! # What this module does NOT handle:
//! - Omitting codecs from update bodies (the caller builds the update value)

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Stream;

impl TimeplusClient {
    pub async fn create_stream(&self, stream: &Stream) -> Result<Stream> {
        self.post(stream).await
    }

    pub async fn get_stream(&self, name: &str) -> Result<Stream> {
        self.get(&Stream::named(name)).await
    }

    /// Update a stream with `PATCH`; the server rejects `PUT` on streams.
    pub async fn update_stream(&self, stream: &Stream) -> Result<Stream> {
        self.patch(stream).await
    }

    pub async fn delete_stream(&self, name: &str) -> Result<()> {
        self.delete(&Stream::named(name)).await
    }
}
