//! Query-string parameters shared by the endpoints.
//!
//! Parameters are kept as raw strings and interpreted leniently by the core, so a
//! malformed value changes what matches instead of failing the request.

use crate::core::{filter, listing::Pagination};
use std::collections::HashMap;

/// Raw query parameters of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl From<HashMap<String, String>> for QueryParams {
    fn from(raw: HashMap<String, String>) -> Self {
        Self(raw)
    }
}

impl QueryParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `month`, read as its leading integer.
    #[must_use]
    pub fn month(&self) -> Option<i64> {
        filter::parse_month(self.get("month"))
    }

    /// `search`, empty when absent.
    #[must_use]
    pub fn search(&self) -> &str {
        self.get("search").unwrap_or_default()
    }

    /// `page` and `perPage`, with defaults for missing or unusable values.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::from_params(self.get("page"), self.get("perPage"))
    }
}
