use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use dxkit_core::{ensure_dir, make_unix_filename};
use dxkit_types::{Link, is_link};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Looks up the remote name of a file so it can be placed on disk.
pub trait NameResolver {
    fn file_name(&self, link: &Link) -> Result<String>;
}

impl<T: Transport> NameResolver for Client<T> {
    fn file_name(&self, link: &Link) -> Result<String> {
        let desc = self.describe_in_project(&link.id, link.project.as_deref())?;
        desc.get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::InvalidResponse(format!("describe of {} returned no name", link.id))
            })
    }
}

impl<F> NameResolver for F
where
    F: Fn(&Link) -> Result<String>,
{
    fn file_name(&self, link: &Link) -> Result<String> {
        self(link)
    }
}

/// One file to download into the input directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDownload {
    pub input_name: String,
    pub source_file_id: String,
    pub target_dir: PathBuf,
    pub target_file: PathBuf,
}

/// Where every file input of a job lands under the input directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputPlan {
    /// Input names that need a `<idir>/<input>` directory.
    pub dirs: BTreeSet<String>,
    pub files: Vec<FileDownload>,
}

impl InputPlan {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Create `idir` and one subdirectory per planned input.
    pub fn create_dirs(&self, idir: &Path) -> Result<()> {
        ensure_dir(idir)?;
        for dir in &self.dirs {
            ensure_dir(&idir.join(dir))?;
        }
        Ok(())
    }

    fn add_file(
        &mut self,
        idir: &Path,
        input_name: &str,
        link: &Link,
        resolver: &impl NameResolver,
    ) -> Result<()> {
        let name = make_unix_filename(&resolver.file_name(link)?);
        let target_dir = idir.join(input_name);

        self.files.push(FileDownload {
            input_name: input_name.to_string(),
            source_file_id: link.id.clone(),
            target_file: target_dir.join(name),
            target_dir,
        });
        self.dirs.insert(input_name.to_string());
        Ok(())
    }
}

/// Plan the downloads for a job input manifest.
///
/// A single file link becomes one download into `<idir>/<input>/`. Array
/// inputs put every file link they contain into that same directory; array
/// elements that are not file links are skipped with a warning. Everything
/// else (numbers, strings, links to records or applets) needs no download.
pub fn plan_job_inputs(
    job_input: &Map<String, Value>,
    idir: &Path,
    resolver: &impl NameResolver,
) -> Result<InputPlan> {
    let mut plan = InputPlan::default();

    for (input_name, value) in job_input {
        if is_link(value) {
            if let Some(link) = Link::parse(value).filter(Link::is_file) {
                plan.add_file(idir, input_name, &link, resolver)?;
            }
        } else if let Value::Array(elements) = value {
            for element in elements {
                match Link::parse(element).filter(Link::is_file) {
                    Some(link) => plan.add_file(idir, input_name, &link, resolver)?,
                    None => warn!(input = %input_name, link = %element, "not a file link, skipping"),
                }
            }
        }
    }

    debug!(
        files = plan.files.len(),
        dirs = plan.dirs.len(),
        "job input plan ready"
    );
    Ok(plan)
}

/// Read a job input manifest (`job_input.json`).
pub fn load_job_input(path: &Path) -> Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidInput(format!(
            "{}: expected a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
