use serde::Serialize;
use serde_json::Value;

/// Key marking a JSON object as a reference to a platform object.
pub const LINK_KEY: &str = "$dnanexus_link";

/// A reference to a platform object found in job input or output.
///
/// Two shapes exist on the wire:
/// - `{"$dnanexus_link": "file-xxxx"}`
/// - `{"$dnanexus_link": {"id": "file-xxxx", "project": "project-yyyy"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl Link {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project: None,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Parse a link value. Returns `None` for anything that is not a link to
    /// a concrete object id (including job-output references).
    pub fn parse(value: &Value) -> Option<Self> {
        match value.get(LINK_KEY)? {
            Value::String(id) => Some(Self::new(id.clone())),
            Value::Object(target) => {
                let id = target.get("id")?.as_str()?;
                let project = target
                    .get("project")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(Self {
                    id: id.to_string(),
                    project,
                })
            }
            _ => None,
        }
    }

    /// Object class encoded in the id prefix (`file`, `record`, `applet`, ...).
    pub fn class(&self) -> Option<&str> {
        object_class(&self.id)
    }

    pub fn is_file(&self) -> bool {
        self.class() == Some("file")
    }

    pub fn to_value(&self) -> Value {
        let target = match &self.project {
            Some(project) => serde_json::json!({"id": self.id, "project": project}),
            None => Value::String(self.id.clone()),
        };
        serde_json::json!({ LINK_KEY: target })
    }
}

/// Check whether a JSON value is shaped like a link.
pub fn is_link(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key(LINK_KEY))
}

/// Extract the class prefix of an object id such as `file-B0123`.
pub fn object_class(id: &str) -> Option<&str> {
    match id.split_once('-') {
        Some((class, rest)) if !class.is_empty() && !rest.is_empty() => Some(class),
        _ => None,
    }
}
