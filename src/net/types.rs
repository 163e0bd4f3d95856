//! Wire DTOs for the notification endpoints and push stream.
//!
//! DESIGN
//! ======
//! Server payloads are loosely typed: ids arrive as numbers or strings and
//! optional fields may be missing or `null`. Deserialization accepts all of
//! those shapes so one odd row never discards an otherwise usable response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque notification identifier used as the DOM correlation key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NotificationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let id = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Null => String::new(),
            other => {
                return Err(serde::de::Error::custom(format!("invalid notification id: {other}")));
            }
        };
        Ok(Self(id))
    }
}

/// A notification row as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: NotificationId,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub message: String,
    /// Server timestamp string; see `render::format_timestamp`.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_read: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `GET /notifications/list/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Option<Vec<Notification>>,
}

impl NotificationList {
    pub fn into_items(self) -> Vec<Notification> {
        self.notifications.unwrap_or_default()
    }
}

/// A message pushed over the notification stream.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub id: NotificationId,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub message: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST /notifications/mark-read/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkReadResponse {
    /// Authoritative unread count, when the server sent a usable one.
    pub unread: Option<u32>,
}

impl MarkReadResponse {
    /// Interpret any JSON body. Integers, integral floats and numeric strings
    /// are accepted for `unread`; anything else leaves the count unknown
    /// rather than failing the whole response.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let unread = match value.get("unread") {
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
            Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
        .and_then(|n| u32::try_from(n).ok());
        Self { unread }
    }
}

/// Display text as a browser would print it: `null` shows as "null" and
/// other scalars print their JSON form.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Null => false,
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}
