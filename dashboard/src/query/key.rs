//! Cache keys.

use std::fmt;

/// Ordered key segments, e.g. `["mev", "transaction", "0xabc"]`.
///
/// A key matches a prefix when its leading segments equal the prefix's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Extend with one more segment.
    pub fn with(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Build a [`QueryKey`] from anything implementing `ToString`.
///
/// ```
/// use dashboard::query_key;
/// let key = query_key!["mev", "block", 19_000_000u64];
/// assert_eq!(key.segments(), ["mev", "block", "19000000"]);
/// ```
#[macro_export]
macro_rules! query_key {
    ($($segment:expr),* $(,)?) => {
        $crate::query::QueryKey::from_segments(vec![$(::std::string::ToString::to_string(&$segment)),*])
    };
}
