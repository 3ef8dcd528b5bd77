use super::SelectedUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const AVATAR_PATH_PREFIX: &str = "/api/v1/user_avatar/";

/// Image source returned by the avatar endpoint, used verbatim.
///
/// `None` is a JSON `null` body and clears the image source.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarSrc(pub Option<String>);

impl AvatarSrc {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Converts a decoded response body into an image source.
    ///
    /// Any JSON value is accepted and rendered the way a browser stringifies
    /// an attribute value: arrays join their elements with `,`, objects become
    /// `[object Object]`.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => AvatarSrc(None),
            other => AvatarSrc(Some(attribute_text(&other))),
        }
    }
}

fn attribute_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(attribute_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Integral floats print without a fraction, as `1.0` does in a browser.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

impl fmt::Display for AvatarSrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(src) => write!(f, "{}", src),
            None => write!(f, "null"),
        }
    }
}

impl From<&str> for AvatarSrc {
    fn from(value: &str) -> Self {
        AvatarSrc(Some(value.to_owned()))
    }
}

/// Request path for a user's avatar. Plain concatenation, no escaping.
pub fn avatar_path(prefix: &str, user: &SelectedUser) -> String {
    format!("{}{}", prefix, user.as_str())
}
