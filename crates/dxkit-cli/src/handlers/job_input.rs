use std::path::PathBuf;

use anyhow::{Context as _, Result};
use dxkit_sdk::{Client, discover_input_spec, load_job_input, plan_job_inputs};

use crate::args::OutputFormat;
use crate::commands::Session;
use crate::output::Printer;

pub fn plan(
    session: &Session,
    input_json: Option<PathBuf>,
    create_dirs: bool,
    printer: &mut Printer,
) -> Result<()> {
    let input_json = input_json.unwrap_or_else(|| session.layout.input_json());
    let job_input = load_job_input(&input_json)
        .with_context(|| format!("reading job input {}", input_json.display()))?;

    let client = Client::connect(session.context.clone()).context("creating API client")?;
    let idir = session.layout.input_dir();
    let plan = plan_job_inputs(&job_input, &idir, &client)?;

    if create_dirs {
        plan.create_dirs(&idir)
            .with_context(|| format!("creating input directories under {}", idir.display()))?;
    }

    match printer.format() {
        OutputFormat::Json => printer.document(&plan),
        OutputFormat::Plain => {
            for file in &plan.files {
                printer.line(format_args!(
                    "{}\t{}",
                    file.source_file_id,
                    file.target_file.display()
                ))?;
            }
            Ok(())
        }
    }
}

pub fn spec(session: &Session, printer: &mut Printer) -> Result<()> {
    let client = Client::connect(session.context.clone()).context("creating API client")?;
    let spec = discover_input_spec(&client).context("discovering input spec")?;

    match printer.format() {
        OutputFormat::Json => printer.document(&spec),
        OutputFormat::Plain => {
            for (name, entry) in &spec {
                let optional = if entry.optional { "optional" } else { "required" };
                printer.line(format_args!("{}\t{}\t{}", name, entry.class, optional))?;
            }
            Ok(())
        }
    }
}
