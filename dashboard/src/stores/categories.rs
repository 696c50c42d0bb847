//! # Document Category Store

use shared::{CategoryPayload, DocumentCategory};

use super::messages::CATEGORIES;
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct DocumentCategoryStore {
    api: ApiClient,
    cell: StoreCell<DocumentCategory>,
}

impl ResourceStore for DocumentCategoryStore {
    type Item = DocumentCategory;

    fn cell(&self) -> &StoreCell<DocumentCategory> {
        &self.cell
    }
}

impl DocumentCategoryStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<DocumentCategory>> {
        let response = self
            .cell
            .run(
                "fetch_categories",
                CATEGORIES.fetch_list,
                self.api.get_categories(),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_category(&self, id: &str) -> Result<DocumentCategory> {
        let response = self
            .cell
            .run(
                "fetch_category",
                CATEGORIES.fetch_one,
                self.api.get_category(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<DocumentCategory> {
        let response = self
            .cell
            .run(
                "create_category",
                CATEGORIES.create,
                self.api.create_category(payload),
                |state, response| state.prepend(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_category(&self, id: &str, payload: &CategoryPayload) -> Result<DocumentCategory> {
        let response = self
            .cell
            .run(
                "update_category",
                CATEGORIES.update,
                self.api.update_category(id, payload),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_category",
                CATEGORIES.delete,
                self.api.delete_category(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_category_lifecycle() {
        let mock = MockTransport::new();
        let store = DocumentCategoryStore::new(mock.client());

        mock.reply(
            Method::GET,
            "/document-categories",
            json!({ "success": true, "data": [{ "_id": "k1", "name": "Hợp đồng", "icon": "file" }] }),
        );
        store.fetch_categories().await.unwrap();

        mock.reply(
            Method::POST,
            "/document-categories",
            json!({ "success": true, "data": { "_id": "k2", "name": "Báo cáo" } }),
        );
        store
            .create_category(&CategoryPayload {
                name: Some("Báo cáo".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = store.items().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Báo cáo", "Hợp đồng"]);

        mock.reply(
            Method::PUT,
            "/document-categories/k1",
            json!({ "success": true, "data": { "_id": "k1", "name": "Hợp đồng", "icon": "contract" } }),
        );
        store
            .update_category(
                "k1",
                &CategoryPayload {
                    icon: Some("contract".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(store.snapshot().get("k1").unwrap().icon.as_deref(), Some("contract"));

        mock.reply(Method::DELETE, "/document-categories/k2", json!({ "success": true }));
        store.delete_category("k2").await.unwrap();
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_category() {
        let mock = MockTransport::new();
        let store = DocumentCategoryStore::new(mock.client());
        mock.reply(
            Method::GET,
            "/document-categories",
            json!({ "success": true, "data": [{ "_id": "k1", "name": "Hợp đồng" }] }),
        );
        store.fetch_categories().await.unwrap();

        mock.fail_bare(Method::DELETE, "/document-categories/k1", 409);
        assert!(store.delete_category("k1").await.is_err());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.error().as_deref(), Some(CATEGORIES.delete));
    }
}
