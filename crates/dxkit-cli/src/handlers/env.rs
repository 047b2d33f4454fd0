use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::OutputFormat;
use crate::commands::Session;
use crate::output::Printer;

#[derive(Serialize)]
struct EnvReport<'a> {
    apiserver: String,
    workspace_id: Option<&'a str>,
    job_id: Option<&'a str>,
    dxapp_json: Option<PathBuf>,
    home: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
    input_json: PathBuf,
    output_json: PathBuf,
    config_path: PathBuf,
}

pub fn handle(session: &Session, printer: &mut Printer) -> Result<()> {
    let context = &session.context;
    let layout = &session.layout;

    let report = EnvReport {
        apiserver: context.api.base_url(),
        workspace_id: context.workspace_id.as_deref(),
        job_id: context.job_id.as_deref(),
        dxapp_json: context.dxapp_json.clone(),
        home: layout.home().to_path_buf(),
        input_dir: layout.input_dir(),
        output_dir: layout.output_dir(),
        input_json: layout.input_json(),
        output_json: layout.output_json(),
        config_path: session.config_path.clone(),
    };

    if printer.format() == OutputFormat::Json {
        return printer.document(&report);
    }

    printer.field("API server", &report.apiserver)?;
    printer.field("Workspace", report.workspace_id.unwrap_or("(none)"))?;
    if let Some(job_id) = report.job_id {
        printer.field("Job", job_id)?;
    }
    if let Some(path) = &report.dxapp_json {
        printer.field("dxapp.json", path.display())?;
    }
    printer.field("Home", report.home.display())?;
    printer.field("Input dir", report.input_dir.display())?;
    printer.field("Output dir", report.output_dir.display())?;
    printer.field("Config", report.config_path.display())?;
    Ok(())
}
