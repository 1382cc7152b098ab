use std::{error::Error as StdError, fmt};

use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorType {
    ParseError,
    ConfigError,
    PredicateError,
}

impl fmt::Display for QueryErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryErrorType::ParseError => f.write_str("parse error:"),
            QueryErrorType::ConfigError => f.write_str("config error:"),
            QueryErrorType::PredicateError => f.write_str("predicate error:"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{kind} {msg}")]
pub struct QueryError {
    pub kind: QueryErrorType,
    pub msg: String,
    #[source]
    source: Option<BoxError>,
}

impl QueryError {
    pub fn new(kind: QueryErrorType, msg: String) -> Self {
        Self {
            kind,
            msg,
            source: None,
        }
    }

    pub fn parse(msg: String) -> Self {
        Self::new(QueryErrorType::ParseError, msg)
    }

    pub fn config(msg: String) -> Self {
        Self::new(QueryErrorType::ConfigError, msg)
    }

    /// A failure raised by a fallible filter while testing the member `key`
    /// found at `path`.
    pub fn predicate(key: &str, path: &str, source: BoxError) -> Self {
        Self {
            kind: QueryErrorType::PredicateError,
            msg: format!("filter failed on `{key}` at {path}: {source}"),
            source: Some(source),
        }
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::parse(format!("invalid JSON: {err}")).with_source(err)
    }
}
