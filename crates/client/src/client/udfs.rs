//! User-defined function methods for [`TimeplusClient`].
//!
//! Remote and JavaScript functions share `/udfs` and are addressed by name.

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::Udf;

impl TimeplusClient {
    pub async fn create_udf(&self, udf: &Udf) -> Result<Udf> {
        self.post(udf).await
    }

    pub async fn get_udf(&self, name: &str) -> Result<Udf> {
        self.get(&Udf::named(name)).await
    }

    pub async fn update_udf(&self, udf: &Udf) -> Result<Udf> {
        self.put(udf).await
    }

    pub async fn delete_udf(&self, name: &str) -> Result<()> {
        self.delete(&Udf::named(name)).await
    }
}
