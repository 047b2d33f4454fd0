use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::{Error, Result};

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_HOST: &str = "api.dnanexus.com";
const DEFAULT_PORT: u16 = 443;

/// Location of the remote API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiServer {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

impl ApiServer {
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Values given explicitly by the caller (typically CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub api_protocol: Option<String>,
    pub api_host: Option<String>,
    pub api_port: Option<u16>,
    pub project: Option<String>,
}

/// Ambient context a client runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub api: ApiServer,
    /// Container searched when a data-object query names no project.
    pub workspace_id: Option<String>,
    /// Set when running inside a job.
    pub job_id: Option<String>,
    /// Local `dxapp.json` used to discover the input spec outside a job.
    pub dxapp_json: Option<PathBuf>,
}

impl Context {
    /// Resolve every setting with priority: explicit override, environment
    /// variable, config file, built-in default.
    ///
    /// Inside a job (`DX_JOB_ID` set) the workspace is the job's temporary
    /// container `DX_WORKSPACE_ID`; elsewhere it is the selected project.
    pub fn resolve(config: &Config, overrides: &ContextOverrides) -> Result<Self> {
        let defaults = ApiServer::default();

        let protocol = overrides
            .api_protocol
            .clone()
            .or_else(|| env_var("DX_APISERVER_PROTOCOL"))
            .or_else(|| config.api.protocol.clone())
            .unwrap_or(defaults.protocol);

        let host = overrides
            .api_host
            .clone()
            .or_else(|| env_var("DX_APISERVER_HOST"))
            .or_else(|| config.api.host.clone())
            .unwrap_or(defaults.host);

        let port = match overrides.api_port {
            Some(port) => port,
            None => match env_var("DX_APISERVER_PORT") {
                Some(raw) => raw.parse().map_err(|_| {
                    Error::Config(format!("DX_APISERVER_PORT is not a valid port: {}", raw))
                })?,
                None => config.api.port.unwrap_or(defaults.port),
            },
        };

        let job_id = env_var("DX_JOB_ID");
        let workspace_id = if job_id.is_some() {
            overrides
                .project
                .clone()
                .or_else(|| env_var("DX_WORKSPACE_ID"))
        } else {
            overrides
                .project
                .clone()
                .or_else(|| env_var("DX_PROJECT_CONTEXT_ID"))
                .or_else(|| config.project.clone())
        };

        Ok(Self {
            api: ApiServer {
                protocol,
                host,
                port,
            },
            workspace_id,
            job_id,
            dxapp_json: env_var("DX_TEST_DXAPP_JSON").map(PathBuf::from),
        })
    }

    /// Resolve from the environment and the default config file.
    pub fn from_env() -> Result<Self> {
        let config = Config::load()?;
        Self::resolve(&config, &ContextOverrides::default())
    }

    pub fn in_job(&self) -> bool {
        self.job_id.is_some()
    }

    pub fn with_workspace(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
