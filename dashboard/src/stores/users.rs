//! # User Store
//!
//! Administrative view over `/users`. Accounts are created through
//! registration, so there is no create here.

use shared::{UpdateUserRequest, User, UserListParams};

use super::messages::{USERS_DELETE, USERS_FETCH_LIST, USERS_FETCH_ONE, USERS_UPDATE};
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct UserStore {
    api: ApiClient,
    cell: StoreCell<User>,
}

impl ResourceStore for UserStore {
    type Item = User;

    fn cell(&self) -> &StoreCell<User> {
        &self.cell
    }
}

impl UserStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_users(&self, params: &UserListParams) -> Result<Vec<User>> {
        let response = self
            .cell
            .run(
                "fetch_users",
                USERS_FETCH_LIST,
                self.api.get_users(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_user(&self, id: &str) -> Result<User> {
        let response = self
            .cell
            .run(
                "fetch_user",
                USERS_FETCH_ONE,
                self.api.get_user(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        let response = self
            .cell
            .run(
                "update_user",
                USERS_UPDATE,
                self.api.update_user(id, request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_user",
                USERS_DELETE,
                self.api.delete_user(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }
}
