//! # Session
//!
//! Who is signed in, and the storage that remembers it across restarts.

pub mod context;
pub mod cookie;
pub mod storage;

pub use context::SessionContext;
pub use cookie::AccessCookie;
pub use storage::{FileStorage, MemoryStorage, PersistentStorage};
