//! # Query Layer
//!
//! Cached, keyed reads with per-query staleness and bounded retry, plus the
//! hooks built on top of it. Unlike the stores, a query never records an
//! error message; callers get the `Result` and decide.

pub mod cache;
pub mod comments;
pub mod key;
pub mod mev;
pub mod options;
pub mod profile;
pub mod statistics;

pub use cache::QueryCache;
pub use comments::UserCommentQueries;
pub use key::QueryKey;
pub use mev::MevQueries;
pub use options::QueryOptions;
pub use profile::ProfileQuery;
pub use statistics::StatisticsQueries;
