mod args;
mod commands;
mod handlers;
mod logging;
mod output;

pub use args::{Cli, Commands, FindCommand, JobInputCommand, LogLevel, OutputFormat};
pub use commands::run;
