//! The `accessToken` cookie.
//!
//! Built and parsed with the `cookie` crate and kept in session storage as
//! its `Set-Cookie` form, so an expired cookie is detected on reload.

use cookie::time::{Duration, OffsetDateTime};
use cookie::Cookie;

use super::storage::PersistentStorage;
use crate::core::{AppError, Result};

pub const ACCESS_COOKIE_NAME: &str = "accessToken";
pub const ACCESS_COOKIE_DAYS: i64 = 30;
const COOKIE_STORAGE_KEY: &str = "cookie.accessToken";

#[derive(Debug, Clone, PartialEq)]
pub struct AccessCookie {
    cookie: Cookie<'static>,
}

impl AccessCookie {
    pub fn new(token: &str) -> Self {
        Self::issued_at(token, OffsetDateTime::now_utc())
    }

    /// Cookie for `token` valid for 30 days from `now`, on path `/`.
    pub fn issued_at(token: &str, now: OffsetDateTime) -> Self {
        let lifetime = Duration::days(ACCESS_COOKIE_DAYS);
        let cookie = Cookie::build((ACCESS_COOKIE_NAME, token.to_string()))
            .path("/")
            .max_age(lifetime)
            .expires(now + lifetime)
            .build();
        Self { cookie }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let cookie = Cookie::parse_encoded(raw.to_string())
            .map_err(|e| AppError::Storage(format!("Invalid cookie: {}", e)))?;
        if cookie.name() != ACCESS_COOKIE_NAME {
            return Err(AppError::Storage(format!(
                "Expected {} cookie, got {}",
                ACCESS_COOKIE_NAME,
                cookie.name()
            )));
        }
        Ok(Self { cookie })
    }

    pub fn token(&self) -> &str {
        self.cookie.value()
    }

    pub fn path(&self) -> Option<&str> {
        self.cookie.path()
    }

    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.cookie.expires_datetime()
    }

    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at().is_some_and(|expires| expires <= now)
    }

    /// `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        self.cookie.encoded().to_string()
    }

    pub fn persist(&self, storage: &dyn PersistentStorage) -> Result<()> {
        storage.set(COOKIE_STORAGE_KEY, &self.header_value())
    }

    /// The stored cookie, unless it is missing, unreadable or expired.
    pub fn load(storage: &dyn PersistentStorage) -> Option<Self> {
        let raw = storage.get(COOKIE_STORAGE_KEY)?;
        match Self::parse(&raw) {
            Ok(cookie) if !cookie.is_expired_at(OffsetDateTime::now_utc()) => Some(cookie),
            Ok(_) => {
                tracing::debug!("Stored access cookie has expired");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring stored access cookie");
                None
            }
        }
    }

    pub fn clear(storage: &dyn PersistentStorage) -> Result<()> {
        storage.remove(COOKIE_STORAGE_KEY)
    }
}
