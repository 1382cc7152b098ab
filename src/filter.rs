use std::{error::Error as StdError, fmt};

use regex::Regex;
use serde_json::Value;

use crate::errors::{BoxError, QueryError};

type FilterFn = dyn Fn(&str, &Value) -> Result<bool, BoxError> + Send + Sync;

/// A predicate over an object member's key and value.
///
/// A filter is tested exactly once for every member of every object in a
/// document, including objects nested inside arrays.
pub struct Filter {
    func: Box<FilterFn>,
}

impl Filter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        Self::boxed(move |key, value| Ok(f(key, value)))
    }

    /// A filter that can fail. An error returned from `f` aborts the query.
    pub fn fallible<F, E>(f: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<bool, E> + Send + Sync + 'static,
        E: StdError + Send + Sync + 'static,
    {
        Self::boxed(move |key, value| f(key, value).map_err(BoxError::from))
    }

    /// Match members named `key`, whatever their value.
    pub fn key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(move |k, _| k == key)
    }

    /// Match members whose name matches the regular expression `pattern`.
    pub fn key_match(pattern: &str) -> Result<Self, QueryError> {
        let re = Regex::new(pattern).map_err(|err| {
            QueryError::config(format!("invalid key pattern `{pattern}`")).with_source(err)
        })?;
        Ok(Self::new(move |k, _| re.is_match(k)))
    }

    pub fn all() -> Self {
        Self::new(|_, _| true)
    }

    pub fn test(&self, key: &str, value: &Value) -> Result<bool, BoxError> {
        (self.func)(key, value)
    }

    fn boxed<F>(f: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Filter { func: Box::new(f) }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}
