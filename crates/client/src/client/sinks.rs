//! Sink methods for [`TimeplusClient`]. Sinks are addressed by server-assigned id.

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Sink;

impl TimeplusClient {
    /// Create a sink; the returned value carries the assigned `id`.
    pub async fn create_sink(&self, sink: &Sink) -> Result<Sink> {
        self.post(sink).await
    }

    pub async fn get_sink(&self, id: &str) -> Result<Sink> {
        self.get(&Sink::with_id(id)).await
    }

    pub async fn update_sink(&self, sink: &Sink) -> Result<Sink> {
        self.put(sink).await
    }

    pub async fn delete_sink(&self, id: &str) -> Result<()> {
        self.delete(&Sink::with_id(id)).await
    }
}
