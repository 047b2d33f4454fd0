//! Typed filter parameters for each search kind.
//!
//! Setters record only what the caller supplied; the field tables in
//! [`super::fields`] decide how each parameter lands in the query document.

use std::collections::BTreeMap;

use dxkit_types::Describe;
use serde_json::{Map, Value};

use super::fields::SearchKind;

/// Supplied parameters, keyed by parameter name, plus untyped pass-through fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<&'static str, Value>,
    extra: Map<String, Value>,
}

impl Params {
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.values.get(param)
    }

    pub fn contains(&self, param: &str) -> bool {
        self.values.contains_key(param)
    }

    pub fn set(&mut self, param: &'static str, value: impl Into<Value>) {
        self.values.insert(param, value.into());
    }

    /// Untyped parameters. They become per-request options (`timeout`,
    /// `headers`, ...) sent with every page request, never query fields.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn set_extra(&mut self, key: impl Into<String>, value: Value) {
        self.extra.insert(key.into(), value);
    }
}

/// A filter that can be turned into a query for one search kind.
pub trait SearchFilter {
    const KIND: SearchKind;

    fn params(&self) -> &Params;
}

macro_rules! string_setters {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.params.set(stringify!($name), Value::String(value.into()));
                self
            }
        )*
    };
}

macro_rules! bool_setters {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: bool) -> Self {
                self.params.set(stringify!($name), value);
                self
            }
        )*
    };
}

macro_rules! timestamp_setters {
    ($($name:ident),* $(,)?) => {
        $(
            /// Epoch milliseconds; negative values are offsets back from now.
            pub fn $name(mut self, value: i64) -> Self {
                self.params.set(stringify!($name), value);
                self
            }
        )*
    };
}

macro_rules! extra_setter {
    () => {
        /// Attach an unvalidated request option, e.g. `timeout` in seconds.
        pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
            self.params.set_extra(key, value.into());
            self
        }
    };
}

/// Filter for `/system/findDataObjects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataObjectFilter {
    params: Params,
}

impl DataObjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    string_setters! {
        /// Object class, e.g. `file`, `record`, `applet`.
        classname,
        /// `open`, `closing`, `closed` or `any`.
        state,
        /// `hidden`, `visible` or `either`.
        visibility,
        name,
        /// Type every result must conform to.
        typename,
        tag,
        /// Id of an object every result must link to.
        link,
        /// Project to search in. Without it the ambient workspace is searched.
        project,
        /// Folder within `project`; ignored without a project.
        folder,
    }

    bool_setters! {
        /// Look in subfolders of `folder`; ignored without a project.
        recurse,
        describe,
    }

    timestamp_setters!(modified_after, modified_before, created_after, created_before);

    /// Properties (key-value pairs) every result must have.
    pub fn properties<K, V>(mut self, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map: Map<String, Value> = properties
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        self.params.set("properties", map);
        self
    }

    extra_setter!();
}

impl SearchFilter for DataObjectFilter {
    const KIND: SearchKind = SearchKind::DataObjects;

    fn params(&self) -> &Params {
        &self.params
    }
}

/// Filter for `/system/findJobs`.
///
/// `describe` is always sent and defaults to `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFilter {
    params: Params,
}

impl Default for JobFilter {
    fn default() -> Self {
        let mut params = Params::default();
        params.set("describe", Describe::default().to_value());
        Self { params }
    }
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    string_setters! {
        /// User who launched the origin job.
        launched_by,
        /// Id of the program (app or applet) that ran the job.
        program,
        project,
        /// e.g. `failed`, `done`.
        state,
        origin_job,
        /// Parent job id; the literal `"none"` selects jobs without a parent.
        parent_job,
    }

    timestamp_setters!(created_after, created_before);

    /// `true`/`false`, or a structured spec such as `{"io": false}`.
    pub fn describe(mut self, describe: impl Into<Describe>) -> Self {
        self.params.set("describe", describe.into().to_value());
        self
    }

    extra_setter!();
}

impl SearchFilter for JobFilter {
    const KIND: SearchKind = SearchKind::Jobs;

    fn params(&self) -> &Params {
        &self.params
    }
}

/// Filter for `/system/findProjects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    params: Params,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    string_setters! {
        name,
        /// Minimum permission level of returned projects.
        level,
    }

    /// `false`, or the input of the describe call for each project.
    pub fn describe(mut self, describe: impl Into<Describe>) -> Self {
        self.params.set("describe", describe.into().to_value());
        self
    }

    extra_setter!();
}

impl SearchFilter for ProjectFilter {
    const KIND: SearchKind = SearchKind::Projects;

    fn params(&self) -> &Params {
        &self.params
    }
}

/// Filter for `/system/findApps`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppFilter {
    params: Params,
}

impl AppFilter {
    pub fn new() -> Self {
        Self::default()
    }

    string_setters! {
        name,
        category,
        /// Entity (user or org) owning the app.
        owner,
        /// Developer who created the version.
        created_by,
        developer,
    }

    bool_setters! {
        /// Return every version instead of only default versions.
        all_versions,
        published,
        describe,
    }

    timestamp_setters!(modified_after, modified_before, created_after, created_before);

    extra_setter!();
}

impl SearchFilter for AppFilter {
    const KIND: SearchKind = SearchKind::Apps;

    fn params(&self) -> &Params {
        &self.params
    }
}
