use anyhow::{Context as _, Result};
use dxkit_sdk::{
    AppFilter, Client, DataObjectFilter, JobFilter, ProjectFilter, SearchFilter, Transport,
};
use tracing::info;

use crate::args::{FindCommand, ResultArgs};
use crate::commands::Session;
use crate::output::Printer;

pub fn handle(session: &Session, command: FindCommand, printer: &mut Printer) -> Result<()> {
    let client = Client::connect(session.context.clone()).context("creating API client")?;

    match command {
        FindCommand::Data {
            classname,
            state,
            visibility,
            name,
            properties,
            typename,
            tag,
            link,
            in_project,
            folder,
            recurse,
            modified,
            created,
            describe,
            results,
        } => {
            let mut filter = DataObjectFilter::new()
                .maybe(classname, DataObjectFilter::classname)
                .maybe(state, DataObjectFilter::state)
                .maybe(visibility, DataObjectFilter::visibility)
                .maybe(name, DataObjectFilter::name)
                .maybe(typename, DataObjectFilter::typename)
                .maybe(tag, DataObjectFilter::tag)
                .maybe(link, DataObjectFilter::link)
                .maybe(in_project, DataObjectFilter::project)
                .maybe(folder, DataObjectFilter::folder)
                .maybe(recurse, DataObjectFilter::recurse)
                .maybe(describe, DataObjectFilter::describe)
                .maybe(modified.modified_after, DataObjectFilter::modified_after)
                .maybe(modified.modified_before, DataObjectFilter::modified_before)
                .maybe(created.created_after, DataObjectFilter::created_after)
                .maybe(created.created_before, DataObjectFilter::created_before);
            if !properties.is_empty() {
                filter = filter.properties(properties);
            }
            for (key, value) in results.extra.iter().cloned() {
                filter = filter.extra(key, value);
            }
            print_results(&client, &filter, &results, printer)
        }

        FindCommand::Jobs {
            launched_by,
            program,
            in_project,
            state,
            origin_job,
            parent_job,
            created,
            describe,
            results,
        } => {
            let mut filter = JobFilter::new()
                .maybe(launched_by, JobFilter::launched_by)
                .maybe(program, JobFilter::program)
                .maybe(in_project, JobFilter::project)
                .maybe(state, JobFilter::state)
                .maybe(origin_job, JobFilter::origin_job)
                .maybe(parent_job, JobFilter::parent_job)
                .maybe(created.created_after, JobFilter::created_after)
                .maybe(created.created_before, JobFilter::created_before)
                .maybe(describe, JobFilter::describe);
            for (key, value) in results.extra.iter().cloned() {
                filter = filter.extra(key, value);
            }
            print_results(&client, &filter, &results, printer)
        }

        FindCommand::Projects {
            name,
            level,
            describe,
            results,
        } => {
            let mut filter = ProjectFilter::new()
                .maybe(name, ProjectFilter::name)
                .maybe(level, ProjectFilter::level)
                .maybe(describe, ProjectFilter::describe);
            for (key, value) in results.extra.iter().cloned() {
                filter = filter.extra(key, value);
            }
            print_results(&client, &filter, &results, printer)
        }

        FindCommand::Apps {
            name,
            category,
            all_versions,
            published,
            owner,
            created_by,
            developer,
            modified,
            created,
            describe,
            results,
        } => {
            let mut filter = AppFilter::new()
                .maybe(name, AppFilter::name)
                .maybe(category, AppFilter::category)
                .maybe(all_versions, AppFilter::all_versions)
                .maybe(published, AppFilter::published)
                .maybe(owner, AppFilter::owner)
                .maybe(created_by, AppFilter::created_by)
                .maybe(developer, AppFilter::developer)
                .maybe(describe, AppFilter::describe)
                .maybe(modified.modified_after, AppFilter::modified_after)
                .maybe(modified.modified_before, AppFilter::modified_before)
                .maybe(created.created_after, AppFilter::created_after)
                .maybe(created.created_before, AppFilter::created_before);
            for (key, value) in results.extra.iter().cloned() {
                filter = filter.extra(key, value);
            }
            print_results(&client, &filter, &results, printer)
        }
    }
}

fn print_results<T: Transport, F: SearchFilter>(
    client: &Client<T>,
    filter: &F,
    results: &ResultArgs,
    printer: &mut Printer,
) -> Result<()> {
    let limit = results.limit.unwrap_or(usize::MAX);
    let mut cursor = client.find(filter);

    let mut count = 0;
    for item in cursor.by_ref().take(limit) {
        printer.item(&item?)?;
        count += 1;
    }

    info!(
        route = F::KIND.route(),
        results = count,
        requests = cursor.requests_issued(),
        "search finished"
    );
    Ok(())
}

/// Apply an optional CLI value through a filter setter.
trait Maybe: Sized {
    fn maybe<V>(self, value: Option<V>, set: impl FnOnce(Self, V) -> Self) -> Self {
        match value {
            Some(value) => set(self, value),
            None => self,
        }
    }
}

impl<F: SearchFilter> Maybe for F {}
