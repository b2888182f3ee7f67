use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Source;

impl TimeplusClient {
    pub async fn create_source(&self, source: &Source) -> Result<Source> {
        self.post(source).await
    }

    pub async fn get_source(&self, id: &str) -> Result<Source> {
        self.get(&Source::with_id(id)).await
    }

    pub async fn update_source(&self, source: &Source) -> Result<Source> {
        self.put(source).await
    }

    pub async fn delete_source(&self, id: &str) -> Result<()> {
        self.delete(&Source::with_id(id)).await
    }
}
