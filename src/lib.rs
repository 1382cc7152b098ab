//! Find key/value pairs anywhere in a schema-less JSON document.
//!
//! Documents are parsed with [`serde_json`] and walked depth-first. A filter is
//! tested against every member of every object, at any depth, including
//! objects nested inside arrays. Matching members are collected, in traversal
//! order, until the document is exhausted or a result limit is reached.
//!
//! ## Chained configuration
//!
//! Build a [`QueryDescriptor`] from JSON text, then call
//! [`QueryDescriptor::query`].
//!
//! ```
//! use json_query::{errors::QueryError, QueryDescriptor};
//!
//! fn main() -> Result<(), QueryError> {
//!     let mut descriptor = QueryDescriptor::new()
//!         .source(r#"{"CEO": {"name": "John", "Salary": 10000}, "Others": [{"Salary": 3000}]}"#)
//!         .filter(|key, value| key == "Salary" && value.as_f64().is_some_and(|n| n > 2500.0));
//!
//!     for entry in descriptor.query()? {
//!         println!("{} {} = {}", entry.path(), entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Output from the example above:
//!
//! ```text
//! $['CEO']['Salary'] Salary = 10000
//! $['Others'][0]['Salary'] Salary = 3000
//! ```
//!
//! ## Reusable queries
//!
//! A [`Query`] is a filter and a limit with no document attached. Apply it to
//! an already parsed [`serde_json::Value`] with [`Query::find`].
//!
//! ```
//! use json_query::{errors::QueryError, Query};
//! use serde_json::json;
//!
//! fn main() -> Result<(), QueryError> {
//!     let value = json!({"Salary": 1, "nested": {"Salary": 2, "Salary2": 3}});
//!     let entries = Query::key("Salary").with_limit(1).find(&value)?;
//!
//!     assert_eq!(entries.len(), 1);
//!     assert_eq!(entries[0].value, &json!(1));
//!     Ok(())
//! }
//! ```
//!
//! Object members are visited in document order, as `serde_json` is built
//! with its `preserve_order` feature.
pub mod descriptor;
pub mod entry;
pub mod errors;
pub mod ext;
pub mod filter;
pub mod options;
pub mod query;
mod visit;

pub use descriptor::QueryDescriptor;
pub use entry::Entry;
pub use entry::EntryList;
pub use errors::QueryError;
pub use errors::QueryErrorType;
pub use ext::JsonQueryExt;
pub use filter::Filter;
pub use options::QueryOptions;
pub use query::find;
pub use query::Query;
