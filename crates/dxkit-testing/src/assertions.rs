//! JSON assertions for CLI output and recorded requests.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse output made of one JSON document per line.
pub fn parse_json_lines(output: &str) -> Result<Vec<Value>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("line {} is not JSON: {}", i, line))
        })
        .collect()
}

/// Assert that the value at a JSON pointer equals `expected`.
pub fn assert_pointer(json: &Value, pointer: &str, expected: &Value) -> Result<()> {
    let actual = json
        .pointer(pointer)
        .with_context(|| format!("missing '{}' in {}", pointer, json))?;

    if actual != expected {
        anyhow::bail!("'{}' is {} but expected {}", pointer, actual, expected);
    }

    Ok(())
}

/// Assert that a JSON pointer resolves to nothing.
pub fn assert_absent(json: &Value, pointer: &str) -> Result<()> {
    if let Some(value) = json.pointer(pointer) {
        anyhow::bail!("expected '{}' to be absent, found {}", pointer, value);
    }
    Ok(())
}

/// Assert that two query documents are equal once `starting` is removed.
pub fn assert_same_query_except_starting(first: &Value, second: &Value) -> Result<()> {
    let strip = |value: &Value| -> Result<Value> {
        let mut object = value
            .as_object()
            .context("query document must be an object")?
            .clone();
        object.remove("starting");
        Ok(Value::Object(object))
    };

    let (a, b) = (strip(first)?, strip(second)?);
    if a != b {
        anyhow::bail!("query documents differ beyond 'starting':\n{}\n{}", a, b);
    }

    Ok(())
}
