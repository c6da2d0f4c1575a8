//! Pipeline domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Deploy pipeline belonging to one application
///
/// Mirrors the JSON document Gate stores. `(application, name)` is the
/// logical identity the by-name and delete endpoints use; `id` is the
/// server-assigned identity the history endpoint uses. The client does not
/// reconcile the two, so the caller must track which identity a given value
/// actually carries.
///
/// Every field tolerates being absent from a server document and decodes to
/// its zero value, so documents produced by newer service versions keep
/// decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub disabled: bool,
    /// Server-assigned, empty until first persisted
    #[serde(default)]
    pub id: String,
    /// Ordering position among sibling pipelines of the application
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub keep_waiting_pipelines: bool,
    #[serde(default)]
    pub limit_concurrent: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

impl Pipeline {
    /// Pipeline with default values, ready to be filled in before creation
    ///
    /// New pipelines limit concurrent executions until the caller says
    /// otherwise; everything else starts at its zero value.
    pub fn new() -> Self {
        Self {
            application: String::new(),
            disabled: false,
            id: String::new(),
            index: 0,
            keep_waiting_pipelines: false,
            limit_concurrent: true,
            name: String::new(),
            notifications: Vec::new(),
            triggers: Vec::new(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification attached to a pipeline
///
/// Only the keys every notification type carries are typed out; the rest of
/// the document travels through `extra` and round-trips untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub level: String,
    /// Notification type discriminator (e.g. "slack", "email")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Pipeline events this notification fires on
    #[serde(default)]
    pub when: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trigger attached to a pipeline
///
/// Trigger shapes vary per type; unrecognized keys travel through `extra`
/// and round-trip untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(default)]
    pub enabled: bool,
    /// Trigger type discriminator (e.g. "git", "cron")
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
