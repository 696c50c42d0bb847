//! # Resource Stores
//!
//! One store per backend resource. A store owns the mirrored
//! [`ResourceState`] of its resource and funnels every call through
//! [`StoreCell::run`], so `loading`, `error` and the collection follow the
//! same rules everywhere.
//!
//! Stores are cheap to clone; clones share state.

pub mod categories;
pub mod comments;
pub mod documents;
pub mod forum;
pub mod messages;
pub mod projects;
pub mod state;
pub mod tasks;
pub mod upload;
pub mod users;

pub use categories::DocumentCategoryStore;
pub use comments::CommentStore;
pub use documents::DocumentStore;
pub use forum::ForumPostStore;
pub use projects::ProjectStore;
pub use state::{ResourceState, ResourceStore, StoreCell};
pub use tasks::TaskStore;
pub use upload::UploadStore;
pub use users::UserStore;
