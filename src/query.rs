use serde_json::Value;
use tracing::debug;

use crate::{entry::EntryList, errors::QueryError, filter::Filter, visit};

/// A filter and a result limit, applied to already parsed documents.
///
/// A `Query` holds no per-document state, so the same query can be applied to
/// any number of documents, from any number of threads.
#[derive(Debug)]
pub struct Query {
    pub filter: Filter,
    /// Maximum number of entries to collect. `0` collects every match.
    pub limit: usize,
}

impl Query {
    pub fn new(filter: Filter, limit: usize) -> Self {
        Query { filter, limit }
    }

    /// Find every member named `key`.
    pub fn key(key: impl Into<String>) -> Self {
        Query::new(Filter::key(key), 0)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn find<'v>(&self, value: &'v Value) -> Result<EntryList<'v>, QueryError> {
        find(value, &self.filter, self.limit)
    }
}

/// Collect members of `value`, at any depth, that satisfy `filter`.
///
/// `value` must be a JSON object or array. Entries are returned in traversal
/// order: a member comes before its own descendants, object members in
/// document order and array elements in index order.
pub fn find<'v>(
    value: &'v Value,
    filter: &Filter,
    limit: usize,
) -> Result<EntryList<'v>, QueryError> {
    match visit::find(value, filter, limit) {
        Ok(entries) => {
            debug!(
                matched = entries.len(),
                limit,
                limited = limit > 0 && entries.len() >= limit,
                "query complete"
            );
            Ok(entries)
        }
        Err(err) => {
            debug!(error = %err, "query failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_query_is_unlimited() {
        let doc = json!({"a": [{"a": 1}, {"a": 2}], "b": {"a": 3}});
        let query = Query::key("a");
        assert_eq!(query.limit, 0);
        assert_eq!(query.find(&doc).unwrap().len(), 4);
    }

    #[test]
    fn with_limit() {
        let doc = json!({"a": [{"a": 1}, {"a": 2}], "b": {"a": 3}});
        let entries = Query::key("a").with_limit(2).find(&doc).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path(), "$['a']");
        assert_eq!(entries[1].path(), "$['a'][0]['a']");
    }

    #[test]
    fn struct_literal() {
        let doc = json!({"n": 1, "m": {"n": "two"}});
        let query = Query {
            filter: Filter::new(|_, v| v.is_string()),
            limit: 0,
        };

        let entries = query.find(&doc).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "n");
        assert_eq!(entries[0].value, &json!("two"));
    }

    #[test]
    fn shared_document_across_threads() {
        let doc = json!({"a": 1, "b": {"a": 2, "c": 3}, "c": [{"c": 4}]});
        let by_a = Query::key("a");
        let by_c = Query::key("c").with_limit(1);

        std::thread::scope(|s| {
            let a = s.spawn(|| by_a.find(&doc).map(|e| e.len()));
            let c = s.spawn(|| by_c.find(&doc).map(|e| e.len()));
            assert_eq!(a.join().unwrap().unwrap(), 2);
            assert_eq!(c.join().unwrap().unwrap(), 1);
        });
    }
}
