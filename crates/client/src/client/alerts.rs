//! Alert methods for [`TimeplusClient`].
//!
//! # What this module handles:
//! - Create, read, replace, and delete of alerts by id
//!
//! # What this module does NOT handle:
//! - Suppressing server-populated property keys (provider crate)

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Alert;

impl TimeplusClient {
    pub async fn create_alert(&self, alert: &Alert) -> Result<Alert> {
        self.post(alert).await
    }

    pub async fn get_alert(&self, id: &str) -> Result<Alert> {
        self.get(&Alert::with_id(id)).await
    }

    pub async fn update_alert(&self, alert: &Alert) -> Result<Alert> {
        self.put(alert).await
    }

    pub async fn delete_alert(&self, id: &str) -> Result<()> {
        self.delete(&Alert::with_id(id)).await
    }
}
