use std::error::Error as StdError;

use serde_json::Value;
use tracing::trace;

use crate::{
    entry::EntryList,
    errors::QueryError,
    filter::Filter,
    options::QueryOptions,
    query::find,
};

/// A reusable, chainable query over one JSON document.
///
/// Setters consume and return the descriptor, so configuration reads as a
/// single expression. Parsing is deferred until [`query`](Self::query), which
/// means setters can be called in any order and invalid JSON is reported by
/// `query`, not by [`source`](Self::source).
///
/// ```
/// use json_query::{errors::QueryError, QueryDescriptor};
/// use serde_json::json;
///
/// fn main() -> Result<(), QueryError> {
///     let mut descriptor = QueryDescriptor::new()
///         .source(r#"{"CEO": {"Salary": 10000}, "Others": [{"Salary": 3000}]}"#)
///         .key_filter("Salary")
///         .limit(1);
///
///     let entries = descriptor.query()?;
///     assert_eq!(entries.len(), 1);
///     assert_eq!(entries[0].value, &json!(10000));
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct QueryDescriptor {
    source: Option<String>,
    root: Option<Value>,
    filter: Option<Filter>,
    limit: usize,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON text to query. The text is not parsed until the next call
    /// to [`query`](Self::query).
    pub fn source(mut self, text: impl Into<String>) -> Self {
        self.source = Some(text.into());
        self.root = None;
        self
    }

    /// Query an already parsed document instead of JSON text.
    pub fn root(mut self, value: Value) -> Self {
        self.source = None;
        self.root = Some(value);
        self
    }

    /// Set the maximum number of entries to collect, `0` for no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Filter::new(f));
        self
    }

    pub fn try_filter<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<bool, E> + Send + Sync + 'static,
        E: StdError + Send + Sync + 'static,
    {
        self.filter = Some(Filter::fallible(f));
        self
    }

    pub fn key_filter(mut self, key: impl Into<String>) -> Self {
        self.filter = Some(Filter::key(key));
        self
    }

    pub fn key_match(mut self, pattern: &str) -> Result<Self, QueryError> {
        self.filter = Some(Filter::key_match(pattern)?);
        Ok(self)
    }

    /// Replace the filter and limit with those described by `options`.
    pub fn options(mut self, options: &QueryOptions) -> Result<Self, QueryError> {
        self.filter = Some(options.filter()?);
        self.limit = options.limit;
        Ok(self)
    }

    /// Execute the query.
    ///
    /// Every call starts from an empty result list, so calling `query` twice
    /// without changing the configuration yields the same entries.
    pub fn query(&mut self) -> Result<EntryList<'_>, QueryError> {
        if self.root.is_none() {
            let text = self
                .source
                .as_deref()
                .ok_or_else(|| QueryError::config(String::from("no JSON source configured")))?;

            trace!(bytes = text.len(), "parsing JSON source");
            self.root = Some(serde_json::from_str(text)?);
        }

        match (&self.root, &self.filter) {
            (Some(root), Some(filter)) => find(root, filter, self.limit),
            (_, None) => Err(QueryError::config(String::from("no filter configured"))),
            (None, _) => Err(QueryError::config(String::from("no JSON source configured"))),
        }
    }
}
