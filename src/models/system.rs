use serde::{Deserialize, Serialize};

/// Instance-wide settings exposed to authenticated callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    /// Self-registration switch: `open` or `close`.
    pub reg: Option<String>,
    pub task_default_time: Option<Vec<String>>,
    pub system_alias: Option<String>,
    pub system_welcome: String,
    pub server_timezone: Option<String>,
    pub server_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    pub device_count: i64,
    pub version: String,
}
