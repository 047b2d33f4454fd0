use std::collections::BTreeMap;
use std::path::Path;

use dxkit_types::InputSpecEntry;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Declared inputs keyed by input name.
pub type InputSpec = BTreeMap<String, InputSpecEntry>;

/// Find the input spec of the program being run.
///
/// Inside a job the job's app (or applet) is described remotely. Outside a
/// job a local `dxapp.json` named by the context is read instead. With
/// neither available the spec is empty.
pub fn discover_input_spec<T: Transport>(client: &Client<T>) -> Result<InputSpec> {
    let context = client.context();

    if let Some(job_id) = context.job_id.as_deref() {
        debug!(%job_id, "reading input spec from the running job's program");
        let job = client.describe(job_id, &json!({}))?;
        let program = ["app", "applet"]
            .iter()
            .find_map(|key| job.get(*key).and_then(Value::as_str))
            .ok_or_else(|| {
                Error::InvalidResponse(format!("job {} has neither app nor applet", job_id))
            })?;

        let desc = client.describe(program, &json!({}))?;
        return parse_input_spec(desc.get("inputSpec").unwrap_or(&Value::Null));
    }

    match context.dxapp_json.as_deref() {
        Some(path) => load_dxapp_input_spec(path),
        None => Ok(InputSpec::new()),
    }
}

/// Read `inputSpec` from a `dxapp.json` file.
pub fn load_dxapp_input_spec(path: &Path) -> Result<InputSpec> {
    debug!(path = %path.display(), "reading input spec from dxapp.json");
    let text = std::fs::read_to_string(path)?;
    let dxapp: Value = serde_json::from_str(&text)?;
    parse_input_spec(dxapp.get("inputSpec").unwrap_or(&Value::Null))
}

/// Convert an `inputSpec` array into a map. `null` means no inputs.
pub fn parse_input_spec(value: &Value) -> Result<InputSpec> {
    let entries = match value {
        Value::Null => return Ok(InputSpec::new()),
        Value::Array(entries) => entries,
        _ => return Err(Error::InvalidInput("inputSpec must be an array".to_string())),
    };

    let mut spec = InputSpec::new();
    for entry in entries {
        let name = required_str(entry, "name")?;
        let class = required_str(entry, "class")?;
        let optional = entry
            .get("optional")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        spec.insert(
            name.to_string(),
            InputSpecEntry {
                class: class.to_string(),
                optional,
            },
        );
    }
    Ok(spec)
}

fn required_str<'v>(entry: &'v Value, key: &str) -> Result<&'v str> {
    entry.get(key).and_then(Value::as_str).ok_or_else(|| {
        Error::InvalidInput(format!("inputSpec entry is missing a string '{}': {}", key, entry))
    })
}
