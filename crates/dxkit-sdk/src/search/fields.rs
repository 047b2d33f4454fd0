//! Declarative parameter → query-field tables for every search kind.

use serde::Serialize;

/// The four remote find endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    DataObjects,
    Jobs,
    Projects,
    Apps,
}

impl SearchKind {
    pub fn route(self) -> &'static str {
        match self {
            SearchKind::DataObjects => "/system/findDataObjects",
            SearchKind::Jobs => "/system/findJobs",
            SearchKind::Projects => "/system/findProjects",
            SearchKind::Apps => "/system/findApps",
        }
    }

    /// Whether the endpoint continues with `next` cursors. Project search is
    /// a single request whatever the server says.
    pub fn paginated(self) -> bool {
        !matches!(self, SearchKind::Projects)
    }

    pub fn fields(self) -> &'static [FieldRule] {
        match self {
            SearchKind::DataObjects => DATA_OBJECT_FIELDS,
            SearchKind::Jobs => JOB_FIELDS,
            SearchKind::Projects => PROJECT_FIELDS,
            SearchKind::Apps => APP_FIELDS,
        }
    }
}

/// How a supplied parameter value becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Verbatim,
    /// Negative values are offsets from now, resolved once at build time.
    Timestamp,
    /// The string `"none"` becomes an explicit `null`.
    NoneAsNull,
}

/// What to write when the parameter was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Absent,
    /// The caller's ambient workspace (`null` when there is none).
    Workspace,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub param: &'static str,
    pub path: &'static [&'static str],
    pub transform: Transform,
    /// Parameter that must also be supplied for this one to apply.
    pub requires: Option<&'static str>,
    pub fallback: Fallback,
}

impl FieldRule {
    const fn new(param: &'static str, path: &'static [&'static str]) -> Self {
        Self {
            param,
            path,
            transform: Transform::Verbatim,
            requires: None,
            fallback: Fallback::Absent,
        }
    }

    const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    const fn requires(mut self, param: &'static str) -> Self {
        self.requires = Some(param);
        self
    }

    const fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }
}

const fn time(param: &'static str, path: &'static [&'static str]) -> FieldRule {
    FieldRule::new(param, path).transform(Transform::Timestamp)
}

static DATA_OBJECT_FIELDS: &[FieldRule] = &[
    FieldRule::new("classname", &["class"]),
    FieldRule::new("state", &["state"]),
    FieldRule::new("visibility", &["visibility"]),
    FieldRule::new("name", &["name"]),
    FieldRule::new("properties", &["properties"]),
    FieldRule::new("typename", &["type"]),
    FieldRule::new("tag", &["tag"]),
    FieldRule::new("link", &["link"]),
    FieldRule::new("project", &["scope", "project"]).fallback(Fallback::Workspace),
    FieldRule::new("folder", &["scope", "folder"]).requires("project"),
    FieldRule::new("recurse", &["scope", "recurse"]).requires("project"),
    time("modified_after", &["modified", "after"]),
    time("modified_before", &["modified", "before"]),
    time("created_after", &["created", "after"]),
    time("created_before", &["created", "before"]),
    FieldRule::new("describe", &["describe"]),
];

static JOB_FIELDS: &[FieldRule] = &[
    FieldRule::new("launched_by", &["launchedBy"]),
    FieldRule::new("program", &["program"]),
    FieldRule::new("project", &["project"]),
    FieldRule::new("state", &["state"]),
    FieldRule::new("origin_job", &["originJob"]),
    FieldRule::new("parent_job", &["parentJob"]).transform(Transform::NoneAsNull),
    time("created_after", &["created", "after"]),
    time("created_before", &["created", "before"]),
    FieldRule::new("describe", &["describe"]),
];

static PROJECT_FIELDS: &[FieldRule] = &[
    FieldRule::new("name", &["name"]),
    FieldRule::new("level", &["level"]),
    FieldRule::new("describe", &["describe"]),
];

static APP_FIELDS: &[FieldRule] = &[
    FieldRule::new("name", &["name"]),
    FieldRule::new("category", &["category"]),
    FieldRule::new("all_versions", &["allVersions"]),
    FieldRule::new("published", &["published"]),
    FieldRule::new("owner", &["owner"]),
    FieldRule::new("created_by", &["createdBy"]),
    FieldRule::new("developer", &["developer"]),
    time("modified_after", &["modified", "after"]),
    time("modified_before", &["modified", "before"]),
    time("created_after", &["created", "after"]),
    time("created_before", &["created", "before"]),
    FieldRule::new("describe", &["describe"]),
];
