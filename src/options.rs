use serde::{Deserialize, Serialize};

use crate::{errors::QueryError, filter::Filter, query::Query};

/// Query configuration that can be loaded from data.
///
/// At most one of `key` and `pattern` may be given. With neither, every
/// member matches.
///
/// ```
/// use json_query::{Query, QueryOptions};
///
/// let options = QueryOptions::from_json_str(r#"{"pattern": "^Sal", "limit": 2}"#).unwrap();
/// let query = Query::try_from(options).unwrap();
/// assert_eq!(query.limit, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    /// Match members with exactly this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Match members whose name matches this regular expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Maximum number of entries, `0` for no limit.
    pub limit: usize,
}

impl QueryOptions {
    pub fn from_json_str(s: &str) -> Result<Self, QueryError> {
        serde_json::from_str(s).map_err(|err| {
            QueryError::config(format!("invalid query options: {err}")).with_source(err)
        })
    }

    pub fn filter(&self) -> Result<Filter, QueryError> {
        match (&self.key, &self.pattern) {
            (Some(_), Some(_)) => Err(QueryError::config(String::from(
                "query options can not set both `key` and `pattern`",
            ))),
            (Some(key), None) => Ok(Filter::key(key.as_str())),
            (None, Some(pattern)) => Filter::key_match(pattern),
            (None, None) => Ok(Filter::all()),
        }
    }
}

impl TryFrom<QueryOptions> for Query {
    type Error = QueryError;

    fn try_from(options: QueryOptions) -> Result<Self, Self::Error> {
        Ok(Query::new(options.filter()?, options.limit))
    }
}
