//! Sample documents shaped like real API responses and job manifests.

use dxkit_types::Link;
use serde_json::{Value, json};

/// A find response page.
pub fn find_page(results: Vec<Value>, next: Option<Value>) -> Value {
    json!({
        "results": results,
        "next": next,
    })
}

/// `count` result items `{"id": "<prefix>-<n>"}` numbered from `start`.
pub fn result_items(prefix: &str, start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|n| json!({ "id": format!("{}-{:04}", prefix, n) }))
        .collect()
}

/// A server continuation token, shaped like the ones find endpoints return.
pub fn cursor_token(last_id: &str) -> Value {
    json!({ "id": last_id })
}

pub fn file_link(id: &str) -> Value {
    Link::new(id).to_value()
}

pub fn file_link_in(id: &str, project: &str) -> Value {
    Link::new(id).with_project(project).to_value()
}

/// Response of `/file-xxxx/describe`.
pub fn file_describe(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "class": "file",
        "name": name,
        "state": "closed",
    })
}

/// A minimal `dxapp.json` declaring the given `(name, class, optional)` inputs.
pub fn dxapp_json(inputs: &[(&str, &str, bool)]) -> Value {
    let spec: Vec<Value> = inputs
        .iter()
        .map(|(name, class, optional)| {
            json!({
                "name": name,
                "class": class,
                "optional": optional,
            })
        })
        .collect();

    json!({
        "name": "sample_app",
        "runSpec": {"interpreter": "bash", "file": "src/code.sh"},
        "inputSpec": spec,
    })
}
