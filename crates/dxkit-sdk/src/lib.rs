//! dxkit-sdk: client for the platform's search API and job-input planning.
//!
//! # Overview
//!
//! Two pieces do the work:
//! - [`QueryBuilder`] turns a typed filter ([`DataObjectFilter`], [`JobFilter`],
//!   [`ProjectFilter`], [`AppFilter`]) into the query document of one find
//!   endpoint. Only supplied parameters appear in the document; negative
//!   timestamps are resolved against the current time once per build.
//! - [`PageCursor`] is a lazy iterator over the results. It requests a page
//!   only when the previous one is used up, carrying the server's `next`
//!   token as `starting`.
//!
//! # Quickstart
//!
//! ```no_run
//! use dxkit_sdk::{Client, DataObjectFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let filter = DataObjectFilter::new()
//!     .classname("file")
//!     .modified_after(-24 * 60 * 60 * 1000);
//!
//! for item in client.find_data_objects(&filter).take(10) {
//!     println!("{}", item?["id"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Job inputs
//!
//! [`plan_job_inputs`] maps a `job_input.json` manifest onto
//! `<home>/in/<input>/<file name>` paths, describing each file link to learn
//! its name. [`discover_input_spec`] reads the declared inputs of the running
//! program.

pub mod client;
pub mod error;
pub mod job_input;
pub mod search;
pub mod transport;

pub use client::Client;
pub use error::{Error, Result};
pub use job_input::{
    FileDownload, InputPlan, InputSpec, NameResolver, discover_input_spec, load_job_input,
    plan_job_inputs,
};
pub use search::{
    AppFilter, DataObjectFilter, JobFilter, PageCursor, ProjectFilter, QueryBuilder,
    SearchFilter, SearchKind,
};
pub use transport::{HttpTransport, RequestOptions, Transport};

// Re-export the shared layers so callers need a single dependency.
pub use dxkit_core::{Clock, Context, ContextOverrides, Layout, SystemClock};
pub use dxkit_types as types;
