//! Depth-first traversal of a JSON document.
//!
//! Every recursive step returns a [`ControlFlow`]. Once the result limit is
//! reached a `Break` is returned and every enclosing loop stops without
//! visiting further siblings.

use std::ops::ControlFlow;

use serde_json::{Map, Value};

use crate::{
    entry::{normalized_path, Entry, EntryList, Location, PathElement},
    errors::QueryError,
    filter::Filter,
};

type Flow = Result<ControlFlow<()>, QueryError>;

pub fn find<'v>(
    root: &'v Value,
    filter: &Filter,
    limit: usize,
) -> Result<EntryList<'v>, QueryError> {
    let mut collector = Collector::new(filter, limit);

    let _ = match root {
        Value::Object(obj) => collector.visit_object(obj)?,
        Value::Array(arr) => collector.visit_array(arr)?,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(QueryError::parse(format!(
                "expected a JSON object or array at the top level, found {}",
                type_name(root)
            )));
        }
    };

    Ok(collector.entries)
}

struct Collector<'v, 'f> {
    filter: &'f Filter,
    limit: usize,
    location: Location<'v>,
    entries: EntryList<'v>,
}

impl<'v, 'f> Collector<'v, 'f> {
    fn new(filter: &'f Filter, limit: usize) -> Self {
        Collector {
            filter,
            limit,
            location: Vec::new(),
            entries: Vec::new(),
        }
    }

    fn visit(&mut self, value: &'v Value) -> Flow {
        match value {
            Value::Object(obj) => self.visit_object(obj),
            Value::Array(arr) => self.visit_array(arr),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn visit_object(&mut self, obj: &'v Map<String, Value>) -> Flow {
        for (key, value) in obj {
            self.location.push(PathElement::Name(key));
            let flow = self.visit_member(key, value);
            self.location.pop();

            if flow?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn visit_array(&mut self, arr: &'v [Value]) -> Flow {
        for (i, element) in arr.iter().enumerate() {
            self.location.push(PathElement::Index(i));
            let flow = self.visit(element);
            self.location.pop();

            if flow?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn visit_member(&mut self, key: &'v str, value: &'v Value) -> Flow {
        let matched = self
            .filter
            .test(key, value)
            .map_err(|err| QueryError::predicate(key, &normalized_path(&self.location), err))?;

        if matched {
            self.entries.push(Entry::new(key, value, self.location.clone()));

            if self.limit > 0 && self.entries.len() >= self.limit {
                return Ok(ControlFlow::Break(()));
            }
        }

        // A matching member can still contain matching descendants.
        self.visit(value)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys<'v>(entries: &[Entry<'v>]) -> Vec<&'v str> {
        entries.iter().map(|e| e.key).collect()
    }

    #[test]
    fn matching_does_not_stop_descent() {
        let doc = json!({"a": {"a": 1}});
        let entries = find(&doc, &Filter::key("a"), 0).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, &json!({"a": 1}));
        assert_eq!(entries[1].value, &json!(1));
        assert_eq!(entries[1].path(), "$['a']['a']");
    }

    #[test]
    fn arrays_of_objects_are_flattened() {
        let doc = json!({"x": [{"y": 1}, {"y": 2}]});
        let entries = find(&doc, &Filter::key("y"), 0).unwrap();

        assert_eq!(keys(&entries), vec!["y", "y"]);
        assert_eq!(entries[0].value, &json!(1));
        assert_eq!(entries[1].value, &json!(2));
        assert_eq!(entries[1].path(), "$['x'][1]['y']");
    }

    #[test]
    fn array_root() {
        let doc = json!([{"id": 1}, [{"id": 2}], "id", {"other": {"id": 3}}]);
        let entries = find(&doc, &Filter::key("id"), 0).unwrap();

        let values: Vec<&Value> = entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![&json!(1), &json!(2), &json!(3)]);
        assert_eq!(entries[1].path(), "$[1][0]['id']");
    }

    #[test]
    fn limit_stops_all_levels() {
        let doc = json!({
            "a": {"k": 1, "inner": {"k": 2, "k2": 0}},
            "b": {"k": 3},
            "c": [{"k": 4}]
        });

        let entries = find(&doc, &Filter::key("k"), 2).unwrap();
        let values: Vec<&Value> = entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![&json!(1), &json!(2)]);
    }

    #[test]
    fn no_pairs_tested_after_limit() {
        use std::sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        };

        let tested = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&tested);
        let filter = Filter::new(move |key, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            key == "hit"
        });

        let doc = json!({"miss": 0, "hit": {"hit": 1}, "after": {"hit": 2}});
        let entries = find(&doc, &filter, 1).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(tested.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn non_matching_members_do_not_count_toward_limit() {
        let doc = json!({"a": 1, "b": 2, "c": {"a": 3}, "d": [{"a": 4}]});
        let entries = find(&doc, &Filter::key("a"), 3).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn empty_containers() {
        assert!(find(&json!({}), &Filter::all(), 0).unwrap().is_empty());
        assert!(find(&json!([]), &Filter::all(), 0).unwrap().is_empty());
        assert!(find(&json!([[], {}]), &Filter::all(), 0).unwrap().is_empty());
    }

    #[test]
    fn scalar_roots_are_rejected() {
        for doc in [json!(null), json!(true), json!(1.5), json!("a")] {
            let err = find(&doc, &Filter::all(), 0).unwrap_err();
            assert!(err
                .msg
                .starts_with("expected a JSON object or array at the top level"));
        }
    }

    #[test]
    fn predicate_errors_abort_traversal() {
        let filter = Filter::fallible(|key, value| {
            if key == "bad" {
                Err(std::fmt::Error)
            } else {
                Ok(value.is_number())
            }
        });

        let doc = json!({"a": 1, "nested": {"bad": 2}, "b": 3});
        let err = find(&doc, &filter, 0).unwrap_err();
        assert!(err.msg.contains("`bad` at $['nested']['bad']"));
    }
}
