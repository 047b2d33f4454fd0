use super::common::{CreatedArgs, ModifiedArgs, ResultArgs, parse_json, parse_key_value};
use clap::Subcommand;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search data objects, jobs, projects or apps")]
    Find {
        #[command(subcommand)]
        command: FindCommand,
    },

    #[command(about = "Inspect the inputs of the current job")]
    JobInput {
        #[command(subcommand)]
        command: JobInputCommand,
    },

    #[command(about = "Show the resolved API server, workspace and home layout")]
    Env,
}

#[derive(Subcommand)]
pub enum FindCommand {
    #[command(about = "Find data objects (files, records, applets, ...)")]
    Data {
        /// Object class, e.g. file or record
        #[arg(long)]
        classname: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        visibility: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Required property, repeatable
        #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        properties: Vec<(String, String)>,

        #[arg(long = "type")]
        typename: Option<String>,

        #[arg(long)]
        tag: Option<String>,

        /// Id of an object every result must link to
        #[arg(long)]
        link: Option<String>,

        /// Project to search (default: the current workspace)
        #[arg(long = "in-project", value_name = "PROJECT")]
        in_project: Option<String>,

        /// Folder inside --in-project; ignored without it
        #[arg(long)]
        folder: Option<String>,

        /// Also search subfolders of --folder (true or false)
        #[arg(long)]
        recurse: Option<bool>,

        #[command(flatten)]
        modified: ModifiedArgs,

        #[command(flatten)]
        created: CreatedArgs,

        /// Describe each result (true or false)
        #[arg(long)]
        describe: Option<bool>,

        #[command(flatten)]
        results: ResultArgs,
    },

    #[command(about = "Find jobs")]
    Jobs {
        #[arg(long)]
        launched_by: Option<String>,

        /// App or applet id
        #[arg(long)]
        program: Option<String>,

        #[arg(long = "in-project", value_name = "PROJECT")]
        in_project: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        origin_job: Option<String>,

        /// Parent job id, or `none` for jobs without a parent
        #[arg(long)]
        parent_job: Option<String>,

        #[command(flatten)]
        created: CreatedArgs,

        /// true, false, or a JSON describe spec such as '{"io": false}'
        #[arg(long, value_parser = parse_json)]
        describe: Option<Value>,

        #[command(flatten)]
        results: ResultArgs,
    },

    #[command(about = "Find projects (single request)")]
    Projects {
        #[arg(long)]
        name: Option<String>,

        /// Minimum permission level, e.g. VIEW or CONTRIBUTE
        #[arg(long)]
        level: Option<String>,

        /// true, false, or a JSON describe spec
        #[arg(long, value_parser = parse_json)]
        describe: Option<Value>,

        #[command(flatten)]
        results: ResultArgs,
    },

    #[command(about = "Find apps")]
    Apps {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Return every version, not only default ones (true or false)
        #[arg(long)]
        all_versions: Option<bool>,

        #[arg(long)]
        published: Option<bool>,

        #[arg(long)]
        owner: Option<String>,

        #[arg(long)]
        created_by: Option<String>,

        #[arg(long)]
        developer: Option<String>,

        #[command(flatten)]
        modified: ModifiedArgs,

        #[command(flatten)]
        created: CreatedArgs,

        /// Describe each result (true or false)
        #[arg(long)]
        describe: Option<bool>,

        #[command(flatten)]
        results: ResultArgs,
    },
}

#[derive(Subcommand)]
pub enum JobInputCommand {
    #[command(about = "Show where every input file would be downloaded")]
    Plan {
        /// Job input manifest (default: <home>/job_input.json)
        #[arg(long)]
        input_json: Option<PathBuf>,

        /// Create <home>/in and one directory per file input
        #[arg(long)]
        create_dirs: bool,
    },

    #[command(about = "Show the declared input spec of the running program")]
    Spec,
}
