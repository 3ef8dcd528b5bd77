use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a view element, e.g. `user_avatar` or `user_avatar img`.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        ElementId(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// The pair of elements the avatar operations act on.
#[derive(Debug, Clone)]
pub struct AvatarElements {
    pub container: ElementId,
    pub image: ElementId,
}

impl Default for AvatarElements {
    fn default() -> Self {
        Self {
            container: ElementId::from("user_avatar"),
            image: ElementId::from("user_avatar img"),
        }
    }
}
