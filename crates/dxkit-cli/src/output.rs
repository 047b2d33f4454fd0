use std::io::Write;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::args::OutputFormat;

/// Writes command results to stdout in the selected format.
pub struct Printer {
    format: OutputFormat,
    color: bool,
    out: std::io::StdoutLock<'static>,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        let stdout = std::io::stdout();
        Self {
            format,
            color: stdout.is_terminal(),
            out: stdout.lock(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// One search result: a JSON line, or `id<TAB>name` in plain mode.
    pub fn item(&mut self, item: &Value) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(item)?)?,
            OutputFormat::Plain => {
                let id = item.get("id").and_then(Value::as_str).unwrap_or("-");
                let name = item
                    .pointer("/describe/name")
                    .or_else(|| item.get("name"))
                    .and_then(Value::as_str);

                let id = if self.color {
                    id.cyan().to_string()
                } else {
                    id.to_string()
                };
                match name {
                    Some(name) => writeln!(self.out, "{}\t{}", id, name)?,
                    None => writeln!(self.out, "{}", id)?,
                }
            }
        }
        Ok(())
    }

    /// A whole document, pretty-printed.
    pub fn document<T: Serialize>(&mut self, value: &T) -> Result<()> {
        writeln!(self.out, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    pub fn line(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// `key: value` with the key dimmed on a terminal.
    pub fn field(&mut self, key: &str, value: impl std::fmt::Display) -> Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", format!("{}:", key).dimmed(), value)?;
        } else {
            writeln!(self.out, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
