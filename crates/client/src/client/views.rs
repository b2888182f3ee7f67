//! View and materialized view methods for [`TimeplusClient`].
//!
//! Both kinds share `/views`. Updates go out as `PATCH`.

use crate::client::TimeplusClient;
use crate::error::Result;
use crate::models::{MaterializedView, View, ViewApiModel};

impl TimeplusClient {
    pub async fn create_view(&self, view: &View) -> Result<View> {
        let created = self.post(&ViewApiModel::from(view)).await?;
        Ok(created.into())
    }

    pub async fn get_view(&self, name: &str) -> Result<View> {
        let model = self.get(&ViewApiModel::named(name)).await?;
        Ok(model.into())
    }

    pub async fn update_view(&self, view: &View) -> Result<View> {
        let updated = self.patch(&ViewApiModel::from(view)).await?;
        Ok(updated.into())
    }

    pub async fn delete_view(&self, name: &str) -> Result<()> {
        self.delete(&ViewApiModel::named(name)).await
    }

    pub async fn create_materialized_view(
        &self,
        view: &MaterializedView,
    ) -> Result<MaterializedView> {
        let created = self.post(&ViewApiModel::from(view)).await?;
        Ok(created.into())
    }

    pub async fn get_materialized_view(&self, name: &str) -> Result<MaterializedView> {
        let model = self.get(&ViewApiModel::named(name)).await?;
        Ok(model.into())
    }

    /// Update a materialized view.
    ///
    /// The query is never sent: the server cannot change it in place.
    pub async fn update_materialized_view(
        &self,
        view: &MaterializedView,
    ) -> Result<MaterializedView> {
        let mut model = ViewApiModel::from(view);
        model.query.clear();
        let updated = self.patch(&model).await?;
        let mut updated = MaterializedView::from(updated);
        if updated.query.is_empty() {
            updated.query = view.query.clone();
        }
        Ok(updated)
    }

    pub async fn delete_materialized_view(&self, name: &str) -> Result<()> {
        self.delete(&ViewApiModel::named(name)).await
    }
}
