//! Per-call ambient headers.
//!
//! [`CallHeaders`] carries header data scoped to a single call, independent
//! of the headers stored on the client. At send time the two sets are merged
//! key-wise, ambient headers winning on collision; see
//! [`ApiClient::call`](crate::ApiClient::call).

use std::collections::HashMap;

/// Header set scoped to one call.
///
/// The value is plain data passed alongside the call instead of being
/// smuggled through an implicit task-local; merging it into another set is
/// explicit and override-wins.
///
/// # Example
///
/// ```
/// use chela::CallHeaders;
///
/// let scope = CallHeaders::new()
///     .header("X-Request-Id", "abc123")
///     .header("X-Extra-Stuff", "from-caller");
/// assert_eq!(scope.get("X-Request-Id"), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    entries: HashMap<String, String>,
}

impl CallHeaders {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any existing value for the same key.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Merges another set into this one; the other set wins on collision.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
        self
    }

    /// Single header value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns `true` if no headers are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the header entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for CallHeaders {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
