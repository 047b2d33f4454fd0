use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `describe` option of a find request.
///
/// Either a plain flag or a structured sub-specification forwarded to the
/// server's describe call (e.g. `{"io": false}` to drop job I/O details).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Describe {
    Flag(bool),
    Spec(Value),
}

impl Describe {
    pub fn to_value(&self) -> Value {
        match self {
            Describe::Flag(flag) => Value::Bool(*flag),
            Describe::Spec(spec) => spec.clone(),
        }
    }
}

impl Default for Describe {
    fn default() -> Self {
        Describe::Flag(false)
    }
}

impl From<bool> for Describe {
    fn from(flag: bool) -> Self {
        Describe::Flag(flag)
    }
}

impl From<Value> for Describe {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => Describe::Flag(flag),
            other => Describe::Spec(other),
        }
    }
}
