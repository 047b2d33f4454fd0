use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve the home directory of the execution environment:
/// 1. Explicit path (with tilde expansion)
/// 2. HOME environment variable
/// 3. Platform home directory
pub fn resolve_home(explicit_home: Option<&str>) -> Result<PathBuf> {
    if let Some(home) = explicit_home {
        return Ok(expand_tilde(home));
    }

    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| {
        Error::Config("Could not determine home directory: HOME is not set".to_string())
    })
}

/// Resolve the dxkit configuration directory:
/// 1. Explicit path (with tilde expansion)
/// 2. DXKIT_CONFIG_DIR environment variable (with tilde expansion)
/// 3. System config directory
/// 4. ~/.dxkit
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DXKIT_CONFIG_DIR") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("dxkit"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".dxkit"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or system config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Directory layout of a job's execution environment.
///
/// ```text
/// <home>/in                 inputs are downloaded here, one directory per input
/// <home>/out                outputs are created here and uploaded from here
/// <home>/job_input.json     job input manifest
/// <home>/job_output.json    job output manifest
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    home: PathBuf,
}

impl Layout {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn resolve(explicit_home: Option<&str>) -> Result<Self> {
        Ok(Self::new(resolve_home(explicit_home)?))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn input_dir(&self) -> PathBuf {
        self.home.join("in")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.home.join("out")
    }

    pub fn input_json(&self) -> PathBuf {
        self.home.join("job_input.json")
    }

    pub fn output_json(&self) -> PathBuf {
        self.home.join("job_output.json")
    }
}

/// Create a directory if it does not already exist.
///
/// Only the last path component is created. A regular file at `path` is an
/// error; an existing directory is accepted as-is.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir(path)?;
        return Ok(());
    }

    if path.is_file() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Turn a remote object name into a usable unix file name.
///
/// Names may contain `/`, which would otherwise introduce directories.
pub fn make_unix_filename(name: &str) -> String {
    name.replace('/', "%2F")
}
