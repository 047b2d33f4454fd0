use super::args::{Cli, Commands, JobInputCommand};
use super::handlers;
use crate::logging;
use crate::output::Printer;
use anyhow::{Context as _, Result};
use dxkit_core::{Config, Context, ContextOverrides, Layout, resolve_config_dir};
use std::path::PathBuf;

/// Everything a handler needs, resolved once from flags, env and config.
pub struct Session {
    pub context: Context,
    pub layout: Layout,
    pub config_path: PathBuf,
}

impl Session {
    fn resolve(cli: &Cli) -> Result<Self> {
        let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
        let config_path = config_dir.join("config.toml");
        let config = Config::load_from(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;

        let overrides = ContextOverrides {
            api_protocol: cli.apiserver_protocol.clone(),
            api_host: cli.apiserver_host.clone(),
            api_port: cli.apiserver_port,
            project: cli.project.clone(),
        };

        Ok(Self {
            context: Context::resolve(&config, &overrides)?,
            layout: Layout::resolve(cli.home.as_deref())?,
            config_path,
        })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level)?;

    let session = Session::resolve(&cli)?;
    let mut printer = Printer::new(cli.format);

    match cli.command {
        Commands::Find { command } => handlers::find::handle(&session, command, &mut printer),

        Commands::JobInput { command } => match command {
            JobInputCommand::Plan {
                input_json,
                create_dirs,
            } => handlers::job_input::plan(&session, input_json, create_dirs, &mut printer),
            JobInputCommand::Spec => handlers::job_input::spec(&session, &mut printer),
        },

        Commands::Env => handlers::env::handle(&session, &mut printer),
    }
}
