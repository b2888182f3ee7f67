//! Dashboard methods for [`TimeplusClient`].

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Dashboard;

impl TimeplusClient {
    pub async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard> {
        self.post(dashboard).await
    }

    pub async fn get_dashboard(&self, id: &str) -> Result<Dashboard> {
        self.get(&Dashboard::with_id(id)).await
    }

    pub async fn update_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard> {
        self.put(dashboard).await
    }

    pub async fn delete_dashboard(&self, id: &str) -> Result<()> {
        self.delete(&Dashboard::with_id(id)).await
    }
}
