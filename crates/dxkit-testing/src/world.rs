//! TestWorld pattern for isolated CLI runs.
//!
//! Every world owns a temp directory holding a fake home (with `in/` and
//! `job_input.json` as inside a job) and a config directory, so nothing
//! leaks in from the developer's machine.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use dxkit_core::Layout;
use serde_json::Value;

/// Environment variables the CLI reads; cleared for every configured command.
pub const DX_ENV_VARS: &[&str] = &[
    "DX_APISERVER_PROTOCOL",
    "DX_APISERVER_HOST",
    "DX_APISERVER_PORT",
    "DX_WORKSPACE_ID",
    "DX_PROJECT_CONTEXT_ID",
    "DX_JOB_ID",
    "DX_TEST_DXAPP_JSON",
    "DXKIT_CONFIG_DIR",
    "RUST_LOG",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use dxkit_testing::TestWorld;
/// use assert_cmd::Command;
///
/// let world = TestWorld::new().with_env("DX_PROJECT_CONTEXT_ID", "project-1");
/// let mut cmd = Command::new("dxkit");
/// world.configure_command(&mut cmd).args(["env", "--format", "json"]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    layout: Layout,
    config_dir: PathBuf,
    env_vars: BTreeMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let config_dir = temp_dir.path().join("config");

        std::fs::create_dir_all(&home).expect("Failed to create home dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            layout: Layout::new(home),
            temp_dir,
            config_dir,
            env_vars: BTreeMap::new(),
        }
    }

    pub fn home(&self) -> &Path {
        self.layout.home()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `<home>/job_input.json`.
    pub fn with_job_input(self, job_input: &Value) -> Self {
        self.write_json(&self.layout.input_json(), job_input)
            .expect("Failed to write job_input.json");
        self
    }

    /// Write a `dxapp.json` into the temp dir and point `DX_TEST_DXAPP_JSON` at it.
    pub fn with_dxapp_json(self, dxapp: &Value) -> Self {
        let path = self.temp_dir.path().join("dxapp.json");
        self.write_json(&path, dxapp)
            .expect("Failed to write dxapp.json");
        self.with_env("DX_TEST_DXAPP_JSON", path.to_string_lossy())
    }

    /// Write `config.toml` into the config directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_dir.join("config.toml"), toml)
            .expect("Failed to write config.toml");
        self
    }

    /// Configure a CLI command with this world's home, config dir and env vars.
    ///
    /// The caller provides the base command, e.g.
    /// `Command::new(env!("CARGO_BIN_EXE_dxkit"))`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--home")
            .arg(self.layout.home());

        cmd.current_dir(self.temp_dir.path());

        for key in DX_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    fn write_json(&self, path: &Path, value: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }
}
