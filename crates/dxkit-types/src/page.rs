use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One response page of a find endpoint.
///
/// `next` is an opaque continuation token; `null` or a missing key means
/// there are no further pages. `results` must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindPage {
    pub results: Vec<Value>,
    #[serde(default)]
    pub next: Option<Value>,
}
