//! Profile of the signed-in user.

use std::time::Duration;

use shared::{Profile, UpdateProfileRequest};

use super::{QueryCache, QueryKey, QueryOptions};
use crate::core::Result;
use crate::query_key;
use crate::services::api::ApiClient;

pub const PROFILE_STALE_TIME: Duration = Duration::from_secs(5 * 60);

pub fn profile_key() -> QueryKey {
    query_key!["profile"]
}

#[derive(Clone)]
pub struct ProfileQuery {
    api: ApiClient,
    cache: QueryCache,
}

impl ProfileQuery {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    /// Enabled only while the transport carries a token.
    pub fn options(&self) -> QueryOptions {
        QueryOptions::default()
            .enabled(self.api.token().is_some())
            .stale_time(PROFILE_STALE_TIME)
            .retry(1)
    }

    pub async fn fetch(&self) -> Result<Option<Profile>> {
        self.fetch_with(&self.options()).await
    }

    pub(crate) async fn fetch_with(&self, options: &QueryOptions) -> Result<Option<Profile>> {
        let api = &self.api;
        self.cache
            .fetch(&profile_key(), options, move || async move {
                api.get_profile().await.map(|response| response.data)
            })
            .await
    }

    /// Cached profile, stale or not.
    pub fn cached(&self) -> Option<Profile> {
        self.cache.get(&profile_key())
    }

    pub fn is_fetching(&self) -> bool {
        self.cache.is_fetching(&profile_key())
    }

    pub fn invalidate(&self) {
        self.cache.invalidate(&profile_key());
    }

    /// Save and write the server's answer straight into the cache.
    pub async fn update(&self, request: &UpdateProfileRequest) -> Result<Profile> {
        let profile = self.api.update_profile(request).await?.data;
        self.cache.set(&profile_key(), profile.clone());
        Ok(profile)
    }
}
