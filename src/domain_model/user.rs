use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the user whose avatar is requested.
///
/// Opaque and unvalidated. Whatever the caller supplies ends up in the
/// request path as-is, so the caller is responsible for keeping it safe for
/// path interpolation.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedUser(pub String);

impl SelectedUser {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SelectedUser {
    fn from(value: &str) -> Self {
        SelectedUser(value.to_owned())
    }
}

impl From<String> for SelectedUser {
    fn from(value: String) -> Self {
        SelectedUser(value)
    }
}

impl From<u64> for SelectedUser {
    fn from(value: u64) -> Self {
        SelectedUser(value.to_string())
    }
}

impl From<i64> for SelectedUser {
    fn from(value: i64) -> Self {
        SelectedUser(value.to_string())
    }
}
