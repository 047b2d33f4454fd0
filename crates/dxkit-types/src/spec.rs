use serde::{Deserialize, Serialize};

/// Class and optionality of one declared job input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpecEntry {
    pub class: String,
    #[serde(default)]
    pub optional: bool,
}
