use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured query document sent to a remote find endpoint.
///
/// A field is present only when the caller constrained it; a missing key
/// means "unconstrained", which is different from an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(Map<String, Value>);

impl Query {
    /// Key carrying the continuation cursor between pages.
    pub const STARTING: &'static str = "starting";

    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Look up a nested field, e.g. `["scope", "project"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(key))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Insert `value` at a nested path, creating intermediate objects.
    ///
    /// A non-object value sitting on an intermediate key is replaced.
    pub fn insert_path(&mut self, path: &[&str], value: Value) {
        insert_nested(&mut self.0, path, value);
    }

    pub fn starting(&self) -> Option<&Value> {
        self.0.get(Self::STARTING)
    }

    pub fn set_starting(&mut self, cursor: Value) {
        self.0.insert(Self::STARTING.to_string(), cursor);
    }

    /// The document without its continuation cursor.
    pub fn without_starting(&self) -> Query {
        let mut copy = self.clone();
        copy.0.remove(Self::STARTING);
        copy
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Query {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn insert_nested(map: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [first, rest @ ..] => {
            let mut child = match map.remove(*first) {
                Some(Value::Object(child)) => child,
                _ => Map::new(),
            };
            insert_nested(&mut child, rest, value);
            map.insert((*first).to_string(), Value::Object(child));
        }
    }
}
