// Subcommands are grouped by what they talk to: `find` hits the search
// endpoints, `job-input` works on the job's home directory, `env` only
// reports the resolved context.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dxkit")]
#[command(about = "Run platform searches and plan job input downloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (default: $DXKIT_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Home directory of the job (default: $HOME)
    #[arg(long, global = true)]
    pub home: Option<String>,

    #[arg(long, global = true)]
    pub apiserver_protocol: Option<String>,

    #[arg(long, global = true)]
    pub apiserver_host: Option<String>,

    #[arg(long, global = true)]
    pub apiserver_port: Option<u16>,

    /// Project (or job workspace) used when a search names none
    #[arg(long, global = true)]
    pub project: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
