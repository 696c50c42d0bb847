//! # Task Store

use shared::{Task, TaskListParams, TaskPayload, TaskStatus};

use super::messages::TASKS;
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct TaskStore {
    api: ApiClient,
    cell: StoreCell<Task>,
}

impl ResourceStore for TaskStore {
    type Item = Task;

    fn cell(&self) -> &StoreCell<Task> {
        &self.cell
    }
}

impl TaskStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_tasks(&self, params: &TaskListParams) -> Result<Vec<Task>> {
        let response = self
            .cell
            .run(
                "fetch_tasks",
                TASKS.fetch_list,
                self.api.get_tasks(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_task(&self, id: &str) -> Result<Task> {
        let response = self
            .cell
            .run(
                "fetch_task",
                TASKS.fetch_one,
                self.api.get_task(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<Task> {
        let response = self
            .cell
            .run(
                "create_task",
                TASKS.create,
                self.api.create_task(payload),
                |state, response| state.prepend(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<Task> {
        let response = self
            .cell
            .run(
                "update_task",
                TASKS.update,
                self.api.update_task(id, payload),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_status(&self, id: &str, status: TaskStatus) -> Result<Task> {
        let payload = TaskPayload {
            status: Some(status),
            ..Default::default()
        };
        self.update_task(id, &payload).await
    }

    /// Progress above 100 is clamped before sending.
    pub async fn update_progress(&self, id: &str, progress: u8) -> Result<Task> {
        let payload = TaskPayload {
            progress: Some(progress.min(100)),
            ..Default::default()
        };
        self.update_task(id, &payload).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_task",
                TASKS.delete,
                self.api.delete_task(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }
}
