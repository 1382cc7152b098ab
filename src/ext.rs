use serde_json::Value;

use crate::{entry::EntryList, errors::QueryError, filter::Filter, query::find, Query};

/// Extension trait that allows for queries directly on [`serde_json::Value`]
///
/// ## Usage
/// ```rust
/// use json_query::JsonQueryExt;
/// use serde_json::json;
///
/// let value = json!({"CEO": {"Salary": 10000}, "Others": [{"Salary": 3000}]});
/// let salaries: Vec<&serde_json::Value> = value
///     .find_key("Salary")
///     .unwrap()
///     .into_iter()
///     .map(|e| e.value)
///     .collect();
/// assert_eq!(salaries, vec![&json!(10000), &json!(3000)]);
/// ```
pub trait JsonQueryExt {
    fn query(&self, query: &Query) -> Result<EntryList<'_>, QueryError>;

    /// Find every member named `key`.
    fn find_key(&self, key: &str) -> Result<EntryList<'_>, QueryError>;
}

impl JsonQueryExt for Value {
    fn query(&self, query: &Query) -> Result<EntryList<'_>, QueryError> {
        query.find(self)
    }

    fn find_key(&self, key: &str) -> Result<EntryList<'_>, QueryError> {
        find(self, &Filter::key(key), 0)
    }
}
