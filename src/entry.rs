use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::Value;

pub type Location<'v> = Vec<PathElement<'v>>;
pub type EntryList<'v> = Vec<Entry<'v>>;

/// An array element index or object member name in an entry's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElement<'v> {
    Index(usize),
    Name(&'v str),
}

/// A key/value pair that satisfied a query's filter.
///
/// `key` is always the name of the object member that matched. Members found
/// inside arrays keep the key of their enclosing object; array positions only
/// show up in the entry's [`path`](Entry::path).
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'v> {
    pub key: &'v str,
    pub value: &'v Value,
    pub location: Location<'v>,
}

impl<'v> Entry<'v> {
    pub fn new(key: &'v str, value: &'v Value, location: Location<'v>) -> Self {
        Entry {
            key,
            value,
            location,
        }
    }

    /// The location of this entry's member in the query argument as a normalized path.
    pub fn path(&self) -> String {
        normalized_path(&self.location)
    }

    pub fn into_owned(self) -> (String, Value) {
        (self.key.to_owned(), self.value.clone())
    }
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Entry", 3)?;
        s.serialize_field("key", self.key)?;
        s.serialize_field("value", self.value)?;
        s.serialize_field("path", &self.path())?;
        s.end()
    }
}

pub fn normalized_path(location: &[PathElement]) -> String {
    let mut path = String::from("$");
    for element in location {
        match element {
            PathElement::Index(i) => {
                path.push('[');
                path.push_str(&i.to_string());
                path.push(']');
            }
            PathElement::Name(name) => {
                path.push_str("['");
                for c in name.chars() {
                    match c {
                        '\'' => path.push_str("\\'"),
                        '\\' => path.push_str("\\\\"),
                        _ => path.push(c),
                    }
                }
                path.push_str("']");
            }
        }
    }
    path
}
