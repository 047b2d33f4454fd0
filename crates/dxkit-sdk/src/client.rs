use dxkit_core::{Clock, Context, SystemClock};
use dxkit_types::Query;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::search::{
    AppFilter, DataObjectFilter, JobFilter, PageCursor, ProjectFilter, QueryBuilder, SearchFilter,
};
use crate::transport::{HttpTransport, RequestOptions, Transport};

/// Entry point for talking to the API server.
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    context: Context,
    clock: Box<dyn Clock>,
}

impl Client<HttpTransport> {
    /// Connect over HTTP to the server named by `context`.
    pub fn connect(context: Context) -> Result<Self> {
        let transport = HttpTransport::new(&context.api)?;
        Ok(Self::with_transport(transport, context))
    }

    /// Connect using the environment and the default config file.
    pub fn connect_default() -> Result<Self> {
        Self::connect(Context::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, context: Context) -> Self {
        Self {
            transport,
            context,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used to resolve relative timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Build the query document for `filter` without sending anything.
    pub fn query<F: SearchFilter>(&self, filter: &F) -> Query {
        QueryBuilder::new(self.clock.as_ref(), self.context.workspace_id.as_deref())
            .build(F::KIND, filter.params())
    }

    /// Start a lazy search. No request is sent until the cursor is advanced.
    ///
    /// Extra parameters of `filter` ride along as request options.
    pub fn find<F: SearchFilter>(&self, filter: &F) -> PageCursor<'_, T> {
        let query = self.query(filter);
        let options = RequestOptions::from(filter.params().extra().clone());
        debug!(route = F::KIND.route(), options = !options.is_empty(), "search prepared");
        PageCursor::new(&self.transport, F::KIND, query, options)
    }

    pub fn find_data_objects(&self, filter: &DataObjectFilter) -> PageCursor<'_, T> {
        self.find(filter)
    }

    pub fn find_jobs(&self, filter: &JobFilter) -> PageCursor<'_, T> {
        self.find(filter)
    }

    /// Project search is a single request; `next` in the response is ignored.
    pub fn find_projects(&self, filter: &ProjectFilter) -> PageCursor<'_, T> {
        self.find(filter)
    }

    pub fn find_apps(&self, filter: &AppFilter) -> PageCursor<'_, T> {
        self.find(filter)
    }

    /// `/{id}/describe`.
    pub fn describe(&self, id: &str, input: &Value) -> Result<Value> {
        self.transport
            .call(&format!("/{}/describe", id), input, &RequestOptions::default())
    }

    /// Describe an object in the context of `project`, e.g. to read a file name.
    pub fn describe_in_project(&self, id: &str, project: Option<&str>) -> Result<Value> {
        let input = match project {
            Some(project) => json!({ "project": project }),
            None => json!({}),
        };
        self.describe(id, &input)
    }
}
