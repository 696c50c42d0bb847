//! # Session Context
//!
//! The signed-in user and their profile for the lifetime of the process.
//! Create one at startup with [`SessionContext::init`] and share it behind an
//! `Arc`.
//!
//! ## Persistence
//!
//! | storage key     | content                           |
//! |-----------------|-----------------------------------|
//! | `token`         | raw JWT                           |
//! | `user`          | [`SessionUser`] as JSON           |
//! | `userProfile`   | [`Profile`] as JSON               |
//! | access cookie   | `accessToken`, path `/`, 30 days  |
//!
//! `init` reads these back without touching the network, so a restarted
//! process shows the previous user immediately. The profile is refetched on
//! the next [`SessionContext::refresh_profile`].

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, Profile, RegisterRequest, SessionUser, UpdateProfileRequest};
use tracing::{info, warn};

use super::cookie::AccessCookie;
use super::storage::{read_json, write_json, PersistentStorage, PROFILE_KEY, TOKEN_KEY, USER_KEY};
use crate::core::Result;
use crate::query::profile::profile_key;
use crate::query::{ProfileQuery, QueryCache};
use crate::services::api::ApiClient;

#[derive(Debug, Default)]
struct SessionState {
    user: Option<SessionUser>,
    profile: Option<Profile>,
}

pub struct SessionContext {
    api: ApiClient,
    storage: Arc<dyn PersistentStorage>,
    cache: QueryCache,
    profile_query: ProfileQuery,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Rehydrate from storage. Never performs a request.
    pub fn init(api: ApiClient, storage: Arc<dyn PersistentStorage>, cache: QueryCache) -> Self {
        let token = storage
            .get(TOKEN_KEY)
            .or_else(|| AccessCookie::load(storage.as_ref()).map(|cookie| cookie.token().to_string()));
        let user: Option<SessionUser> = read_json(storage.as_ref(), USER_KEY);
        let profile: Option<Profile> = read_json(storage.as_ref(), PROFILE_KEY);

        api.set_token(token);
        let profile_query = ProfileQuery::new(api.clone(), cache.clone());
        if let Some(profile) = &profile {
            // Served as stale data until the next refresh
            cache.set(&profile_key(), profile.clone());
            profile_query.invalidate();
        }

        info!(
            authenticated = api.token().is_some(),
            user = user.as_ref().map(|u| u.username.as_str()).unwrap_or("-"),
            "Session restored"
        );

        Self {
            api,
            storage,
            cache,
            profile_query,
            state: RwLock::new(SessionState { user, profile }),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().user.clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.read().profile.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.api.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.token().is_some() && self.state.read().user.is_some()
    }

    /// True while a profile request is in flight.
    pub fn is_loading_profile(&self) -> bool {
        self.profile_query.is_fetching()
    }

    /// Adopt a freshly issued session, persist it and load its profile.
    ///
    /// The in-memory session is switched before anything is written, so a
    /// storage failure still leaves the user signed in for this process. The
    /// first storage error is returned once every write has been attempted.
    /// A failed profile fetch is only logged and leaves the profile empty.
    pub async fn login_user(&self, user: SessionUser, token: &str) -> Result<()> {
        self.api.set_token(Some(token.to_string()));
        info!(user = %user.username, role = %user.role, "User logged in");

        // The cached profile may belong to the previous user
        self.cache.remove(&profile_key());
        let persisted = [
            self.storage.set(TOKEN_KEY, token),
            AccessCookie::new(token).persist(self.storage.as_ref()),
            write_json(self.storage.as_ref(), USER_KEY, &user),
            self.storage.remove(PROFILE_KEY),
        ];
        {
            let mut state = self.state.write();
            state.user = Some(user);
            state.profile = None;
        }

        if let Err(e) = self.refresh_profile().await {
            warn!(error = %e, "Profile fetch after login failed");
        }
        persisted.into_iter().collect()
    }

    pub async fn sign_in(&self, credentials: &LoginRequest) -> Result<SessionUser> {
        let payload = self.api.login(credentials).await?.data;
        self.login_user(payload.user.clone(), &payload.token).await?;
        Ok(payload.user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionUser> {
        let payload = self.api.register(request).await?.data;
        self.login_user(payload.user.clone(), &payload.token).await?;
        Ok(payload.user)
    }

    /// Resolve the profile query and mirror the result into storage.
    ///
    /// Without a token the query is disabled and the current profile is
    /// returned unchanged.
    pub async fn refresh_profile(&self) -> Result<Option<Profile>> {
        match self.profile_query.fetch().await? {
            Some(profile) => {
                self.mirror_profile(&profile)?;
                Ok(Some(profile))
            }
            None => Ok(self.profile()),
        }
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Profile> {
        let profile = self.profile_query.update(request).await?;
        self.mirror_profile(&profile)?;
        Ok(profile)
    }

    fn mirror_profile(&self, profile: &Profile) -> Result<()> {
        self.state.write().profile = Some(profile.clone());
        write_json(self.storage.as_ref(), PROFILE_KEY, profile)
    }

    /// Local teardown: forget every persisted trace of the session.
    ///
    /// The token, query cache and in-memory user are always cleared. Every
    /// storage key is attempted; the first storage error is returned.
    pub fn logout_user(&self) -> Result<()> {
        self.api.set_token(None);
        self.cache.clear();
        {
            let mut state = self.state.write();
            state.user = None;
            state.profile = None;
        }

        let removed = [
            self.storage.remove(TOKEN_KEY),
            self.storage.remove(USER_KEY),
            self.storage.remove(PROFILE_KEY),
            AccessCookie::clear(self.storage.as_ref()),
        ];
        info!("User logged out");
        removed.into_iter().collect()
    }

    /// Tell the backend, then tear down locally whatever it answered.
    pub async fn sign_out(&self) -> Result<()> {
        if self.api.token().is_some() {
            if let Err(e) = self.api.logout().await {
                warn!(error = %e, "Server-side logout failed");
            }
        }
        self.logout_user()
    }
}
