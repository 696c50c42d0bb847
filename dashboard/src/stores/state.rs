//! # Store State
//!
//! The state every resource store mirrors from the backend, and the one
//! request runner all store methods go through.
//!
//! ## Invariants
//!
//! - `loading` is true only while a request started by the store is pending;
//!   a [`LoadingGuard`] resets it on every exit path.
//! - The collection changes only after a successful response, and only by the
//!   mutation matching that response. A failure touches `error` and nothing else.
//! - Ids are never generated locally.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::Entity;

use crate::core::Result;

/// Mirrored state of one backend resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Total reported by the last list response, when the backend sends one.
    pub count: Option<u64>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            count: None,
        }
    }
}

impl<T: Entity + Clone> ResourceState<T> {
    pub fn replace_all(&mut self, items: Vec<T>, count: Option<u64>) {
        self.items = items;
        self.count = count;
    }

    /// Insert at the front; an existing entry with the same id is dropped first.
    pub fn prepend(&mut self, item: T) {
        self.items.retain(|existing| existing.id() != item.id());
        self.items.insert(0, item);
    }

    /// Insert at the back; an existing entry with the same id is dropped first.
    pub fn append(&mut self, item: T) {
        self.items.retain(|existing| existing.id() != item.id());
        self.items.push(item);
    }

    /// Swap the entry with the same id, and `current` if it is that entry.
    pub fn replace(&mut self, item: &T) {
        for existing in self.items.iter_mut().filter(|existing| existing.id() == item.id()) {
            *existing = item.clone();
        }
        if self.current.as_ref().is_some_and(|current| current.id() == item.id()) {
            self.current = Some(item.clone());
        }
    }

    /// Drop the entry with `id`, clearing `current` if it matched.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|existing| existing.id() != id);
        if self.current.as_ref().is_some_and(|current| current.id() == id) {
            self.current = None;
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Shared, lock-protected [`ResourceState`]. Clones observe the same state.
pub struct StoreCell<T> {
    state: Arc<RwLock<ResourceState<T>>>,
}

impl<T> Clone for StoreCell<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for StoreCell<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(ResourceState::default())),
        }
    }
}

impl<T: Entity + Clone> StoreCell<T> {
    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.read().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        f(&self.state.read())
    }

    pub(crate) fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Run one backend call with the loading/error protocol.
    ///
    /// On success `apply` mutates the state under the write lock and the
    /// response is handed back. On failure `error` becomes the server message
    /// or `fallback`, the state is otherwise untouched and the error is
    /// returned to the caller.
    pub(crate) async fn run<R, Fut>(
        &self,
        operation: &'static str,
        fallback: &'static str,
        request: Fut,
        apply: impl FnOnce(&mut ResourceState<T>, &R),
    ) -> Result<R>
    where
        Fut: Future<Output = Result<R>>,
    {
        let _loading = self.begin();

        match request.await {
            Ok(response) => {
                apply(&mut *self.state.write(), &response);
                tracing::debug!(operation, "Store operation succeeded");
                Ok(response)
            }
            Err(err) => {
                let message = err.message_or(fallback);
                tracing::warn!(operation, error = %err, message = %message, "Store operation failed");
                self.state.write().error = Some(message);
                Err(err)
            }
        }
    }

    fn begin(&self) -> LoadingGuard<T> {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
        LoadingGuard {
            state: Arc::clone(&self.state),
        }
    }
}

/// Resets `loading` when dropped, including when the request future is dropped mid-flight.
pub(crate) struct LoadingGuard<T> {
    state: Arc<RwLock<ResourceState<T>>>,
}

impl<T> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        self.state.write().loading = false;
    }
}

/// Read accessors shared by every store.
pub trait ResourceStore {
    type Item: Entity + Clone;

    fn cell(&self) -> &StoreCell<Self::Item>;

    fn snapshot(&self) -> ResourceState<Self::Item> {
        self.cell().snapshot()
    }

    fn items(&self) -> Vec<Self::Item> {
        self.cell().read(|state| state.items.clone())
    }

    fn current(&self) -> Option<Self::Item> {
        self.cell().read(|state| state.current.clone())
    }

    fn is_loading(&self) -> bool {
        self.cell().read(|state| state.loading)
    }

    fn error(&self) -> Option<String> {
        self.cell().read(|state| state.error.clone())
    }

    fn clear_error(&self) {
        self.cell().clear_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppError;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_prepend_and_append_keep_ids_unique() {
        let mut state = ResourceState::default();
        state.prepend(item("a", "1"));
        state.prepend(item("b", "2"));
        assert_eq!(state.items, vec![item("b", "2"), item("a", "1")]);

        state.append(item("a", "3"));
        assert_eq!(state.items, vec![item("b", "2"), item("a", "3")]);
    }

    #[test]
    fn test_replace_touches_only_matching_entry_and_current() {
        let mut state = ResourceState {
            items: vec![item("a", "1"), item("b", "2")],
            current: Some(item("b", "2")),
            ..Default::default()
        };

        state.replace(&item("b", "new"));
        assert_eq!(state.items, vec![item("a", "1"), item("b", "new")]);
        assert_eq!(state.current, Some(item("b", "new")));

        state.replace(&item("a", "x"));
        assert_eq!(state.current, Some(item("b", "new")));
    }

    #[test]
    fn test_remove_clears_matching_current() {
        let mut state = ResourceState {
            items: vec![item("a", "1"), item("b", "2")],
            current: Some(item("a", "1")),
            ..Default::default()
        };
        state.remove("a");
        assert_eq!(state.items, vec![item("b", "2")]);
        assert_eq!(state.current, None);
    }

    #[tokio::test]
    async fn test_run_failure_sets_fallback_and_keeps_items() {
        let cell: StoreCell<Item> = StoreCell::default();
        cell.state.write().items = vec![item("a", "1")];

        let result: Result<()> = cell
            .run(
                "op",
                "Không thể tải dữ liệu",
                async { Err(AppError::Network("down".into())) },
                |state, _| state.items.clear(),
            )
            .await;

        assert!(result.is_err());
        let state = cell.snapshot();
        assert_eq!(state.items, vec![item("a", "1")]);
        assert_eq!(state.error.as_deref(), Some("Không thể tải dữ liệu"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_loading_is_set_only_while_pending() {
        let cell: StoreCell<Item> = StoreCell::default();
        let observer = cell.clone();

        let result = cell
            .run(
                "op",
                "fallback",
                async move {
                    assert!(observer.read(|state| state.loading));
                    Ok(item("a", "1"))
                },
                |state, created| state.prepend(created.clone()),
            )
            .await
            .unwrap();

        assert_eq!(result, item("a", "1"));
        assert!(!cell.read(|state| state.loading));
        assert_eq!(cell.snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn test_run_clears_previous_error_on_start() {
        let cell: StoreCell<Item> = StoreCell::default();
        cell.state.write().error = Some("old".to_string());

        cell.run("op", "fallback", async { Ok(()) }, |_, _| {})
            .await
            .unwrap();
        assert_eq!(cell.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_dropped_request_resets_loading() {
        let cell: StoreCell<Item> = StoreCell::default();
        {
            let fut = cell.run(
                "op",
                "fallback",
                std::future::pending::<Result<()>>(),
                |_, _| {},
            );
            let _ = tokio::time::timeout(std::time::Duration::from_millis(5), fut).await;
        }
        assert!(!cell.read(|state| state.loading));
    }
}
