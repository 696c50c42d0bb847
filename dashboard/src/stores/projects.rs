//! # Project Store
//!
//! Mirrors `/projects`, including membership changes. Membership calls
//! answer with the whole updated project, which replaces the local copy.

use shared::{AddMemberRequest, Project, ProjectListParams, ProjectPayload};

use super::messages::{self, PROJECTS};
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct ProjectStore {
    api: ApiClient,
    cell: StoreCell<Project>,
}

impl ResourceStore for ProjectStore {
    type Item = Project;

    fn cell(&self) -> &StoreCell<Project> {
        &self.cell
    }
}

impl ProjectStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_projects(&self, params: &ProjectListParams) -> Result<Vec<Project>> {
        let response = self
            .cell
            .run(
                "fetch_projects",
                PROJECTS.fetch_list,
                self.api.get_projects(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_project(&self, id: &str) -> Result<Project> {
        let response = self
            .cell
            .run(
                "fetch_project",
                PROJECTS.fetch_one,
                self.api.get_project(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Project> {
        let response = self
            .cell
            .run(
                "create_project",
                PROJECTS.create,
                self.api.create_project(payload),
                |state, response| state.prepend(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_project(&self, id: &str, payload: &ProjectPayload) -> Result<Project> {
        let response = self
            .cell
            .run(
                "update_project",
                PROJECTS.update,
                self.api.update_project(id, payload),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_project",
                PROJECTS.delete,
                self.api.delete_project(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }

    pub async fn add_member(&self, project_id: &str, user_id: &str, role: Option<String>) -> Result<Project> {
        let request = AddMemberRequest {
            user_id: user_id.to_string(),
            role,
        };
        let response = self
            .cell
            .run(
                "add_member",
                messages::PROJECT_ADD_MEMBER,
                self.api.add_project_member(project_id, &request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn remove_member(&self, project_id: &str, user_id: &str) -> Result<Project> {
        let response = self
            .cell
            .run(
                "remove_member",
                messages::PROJECT_REMOVE_MEMBER,
                self.api.remove_project_member(project_id, user_id),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    async fn store_with_projects(mock: &std::sync::Arc<MockTransport>) -> ProjectStore {
        mock.reply(
            Method::GET,
            "/projects",
            json!({ "success": true, "data": [
                { "_id": "p1", "name": "CRM", "status": "active", "members": [{ "user": "u1" }] },
                { "_id": "p2", "name": "ERP", "status": "planning", "members": [] }
            ]}),
        );
        let store = ProjectStore::new(mock.client());
        store.fetch_projects(&ProjectListParams::default()).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let mock = MockTransport::new();
        let store = store_with_projects(&mock).await;

        mock.reply(
            Method::POST,
            "/projects",
            json!({ "success": true, "data": { "_id": "p3", "name": "HRM" } }),
        );
        store
            .create_project(&ProjectPayload {
                name: Some("HRM".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let ids: Vec<_> = store.items().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[tokio::test]
    async fn test_add_member_replaces_project() {
        let mock = MockTransport::new();
        let store = store_with_projects(&mock).await;

        mock.reply(
            Method::POST,
            "/projects/p2/members",
            json!({ "success": true, "data": {
                "_id": "p2", "name": "ERP", "status": "planning",
                "members": [{ "user": { "_id": "u7", "fullName": "Phạm Chi" }, "role": "editor" }]
            }}),
        );
        store.add_member("p2", "u7", Some("editor".to_string())).await.unwrap();

        let state = store.snapshot();
        assert!(state.get("p2").unwrap().has_member("u7"));
        assert!(state.get("p1").unwrap().has_member("u1"));
        assert_eq!(
            mock.requests().pop().unwrap().body,
            crate::core::RequestBody::Json(json!({ "userId": "u7", "role": "editor" }))
        );
    }

    #[tokio::test]
    async fn test_remove_member_replaces_project() {
        let mock = MockTransport::new();
        let store = store_with_projects(&mock).await;

        mock.reply(
            Method::DELETE,
            "/projects/p1/members/u1",
            json!({ "success": true, "data": { "_id": "p1", "name": "CRM", "status": "active", "members": [] } }),
        );
        store.remove_member("p1", "u1").await.unwrap();
        assert!(!store.snapshot().get("p1").unwrap().has_member("u1"));
    }

    #[tokio::test]
    async fn test_failed_add_member_keeps_state() {
        let mock = MockTransport::new();
        let store = store_with_projects(&mock).await;
        let before = store.snapshot();

        mock.fail_bare(Method::POST, "/projects/p1/members", 500);
        assert!(store.add_member("p1", "u9", None).await.is_err());

        let after = store.snapshot();
        assert_eq!(after.items, before.items);
        assert_eq!(after.error.as_deref(), Some(messages::PROJECT_ADD_MEMBER));
    }
}
