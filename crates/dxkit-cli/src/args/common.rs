use clap::Args;
use serde_json::Value;

/// Time bounds take epoch milliseconds; a negative value means "that many
/// milliseconds before now", e.g. `--modified-after -86400000` for the last day.
#[derive(Args, Debug, Clone, Default)]
pub struct ModifiedArgs {
    #[arg(long, allow_negative_numbers = true, value_name = "MS")]
    pub modified_after: Option<i64>,

    #[arg(long, allow_negative_numbers = true, value_name = "MS")]
    pub modified_before: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreatedArgs {
    #[arg(long, allow_negative_numbers = true, value_name = "MS")]
    pub created_after: Option<i64>,

    #[arg(long, allow_negative_numbers = true, value_name = "MS")]
    pub created_before: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResultArgs {
    /// Stop after this many results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Request option sent with every page request, e.g. `--extra timeout=30`
    #[arg(long = "extra", value_name = "KEY=JSON", value_parser = parse_key_json)]
    pub extra: Vec<(String, Value)>,
}

pub fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON '{}': {}", raw, e))
}

/// `KEY=JSON`; a value that is not valid JSON is taken as a plain string.
pub fn parse_key_json(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=JSON, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    Ok((key.to_string(), value.to_string()))
}
